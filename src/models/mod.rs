//! # 数据模型模块
//!
//! 定义转换任务的核心数据类型。
//!
//! ## 依赖关系
//! - 被 `commands/`, `parsers/`, `host/`, `batch/` 使用
//! - 无外部模块依赖（除 error.rs）

pub mod job;
pub mod outcome;

pub use job::{ConvertConfig, ConvertJob, ExportOptions, InputFormat};
pub use outcome::{FailureKind, FileFailure, ReportRow};
