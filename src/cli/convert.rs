//! # convert 子命令 CLI 定义
//!
//! 批量转换模型文件为 GLB。输入/输出路径、候选模式、宿主路径和
//! 导出开关都是参数，不存在硬编码路径。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input directory containing model files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for converted GLB files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Comma-separated glob patterns for candidate files
    #[arg(short, long, default_value = "*.stp,*.step")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// Path to the Blender executable
    #[arg(long, env = "BLENDER", default_value = "blender")]
    pub blender: PathBuf,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Write a per-file CSV report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Do not export materials
    #[arg(long, default_value_t = false)]
    pub no_materials: bool,

    /// Do not export vertex colors
    #[arg(long, default_value_t = false)]
    pub no_vertex_colors: bool,

    /// Do not export normals
    #[arg(long, default_value_t = false)]
    pub no_normals: bool,

    /// Do not export texture coordinates
    #[arg(long, default_value_t = false)]
    pub no_texcoords: bool,
}
