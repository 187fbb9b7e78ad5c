//! # step2glb - 批量 STEP -> GLB 转换工具
//!
//! 驱动 Blender 后台模式，把 CAD 交换格式的模型文件批量转换为
//! Web 友好的 GLB 二进制格式。本工具不含任何几何转换逻辑，
//! 导入/导出完全委托给宿主程序的算子；这里负责文件发现、格式
//! 嗅探派发、逐文件容错执行和结果汇总。
//!
//! ## 子命令
//! - `convert` - 批量转换为 GLB
//! - `scan`    - 预演：列出候选文件及其实际格式
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (格式嗅探)
//!   │     ├── host/      (宿主程序驱动)
//!   │     └── batch/     (收集与顺序执行)
//!   ├── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod host;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
