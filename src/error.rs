//! # 统一错误处理模块
//!
//! 定义 step2glb 的所有错误类型，使用 `thiserror` 派生。
//!
//! 注意：单个文件的转换失败不算错误，它们以 `ProcessResult::Failed`
//! 的形式汇入运行统计。此处的错误类型只覆盖使整个运行无法继续的
//! 环境性问题（目录缺失、宿主程序找不到、报告无法写入等）。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// step2glb 统一错误类型
#[derive(Error, Debug)]
pub enum Step2GlbError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 格式识别错误
    // ─────────────────────────────────────────────────────────────
    #[error("Unsupported input format: {path}\nReason: {reason}")]
    UnsupportedFormat { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 宿主程序错误
    // ─────────────────────────────────────────────────────────────
    #[error("Host application '{command}' not found in PATH")]
    CommandNotFound { command: String },

    #[error("Host application failed: {command}\n{stderr}")]
    CommandFailed { command: String, stderr: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Step2GlbError>;
