//! # scan 子命令 CLI 定义
//!
//! 预演模式：只收集并嗅探候选文件，报告 convert 将会做什么，
//! 不启动宿主程序。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Input directory containing model files
    #[arg(short, long)]
    pub input: PathBuf,

    /// Comma-separated glob patterns for candidate files
    #[arg(short, long, default_value = "*.stp,*.step")]
    pub pattern: String,

    /// Recurse into subdirectories
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,
}
