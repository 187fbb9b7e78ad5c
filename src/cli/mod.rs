//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 批量 STEP -> GLB 转换
//! - `scan`: 预演，只收集并嗅探候选文件，不调用宿主
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, scan

pub mod convert;
pub mod scan;

use clap::{Parser, Subcommand};

/// step2glb - 批量 STEP -> GLB 转换工具
#[derive(Parser)]
#[command(name = "step2glb")]
#[command(version)]
#[command(about = "Batch-convert STEP CAD files to GLB by driving Blender", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert model files to GLB via the host application
    Convert(convert::ConvertArgs),

    /// Dry-run: list candidates, sniff their actual format, show planned outputs
    Scan(scan::ScanArgs),
}
