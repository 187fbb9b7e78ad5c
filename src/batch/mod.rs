//! # 批量处理模块
//!
//! 候选文件收集与逐文件顺序执行。
//!
//! 宿主程序只有一个活动场景，文件之间严格串行是正确性要求而非
//! 性能取舍，因此这里没有并行执行器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `walkdir`/`glob` 收集文件
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchRunner, ProcessResult, RunSummary};
