//! # 单文件结果数据模型
//!
//! 每个文件的失败以类型化的 (kind, message) 记录，而非仅打印文本，
//! 使运行结果可被机器检查（汇总、CSV 报告）。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/convert.rs`, `utils/report.rs` 使用

use serde::Serialize;

/// 单文件失败类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// 内容无法识别为任何已知格式
    UnsupportedFormat,
    /// 格式已识别，但宿主程序没有对应的导入器（如原生 STEP）
    NoImporter,
    /// 宿主导入算子报错
    ImportFailed,
    /// 导入后场景中没有任何对象
    EmptyScene,
    /// 宿主导出算子报错
    ExportFailed,
    /// 宿主进程本身异常（启动失败、崩溃、输出无法解析）
    Host,
    /// 读取源文件失败
    Io,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::UnsupportedFormat => write!(f, "unsupported-format"),
            FailureKind::NoImporter => write!(f, "no-importer"),
            FailureKind::ImportFailed => write!(f, "import-failed"),
            FailureKind::EmptyScene => write!(f, "empty-scene"),
            FailureKind::ExportFailed => write!(f, "export-failed"),
            FailureKind::Host => write!(f, "host"),
            FailureKind::Io => write!(f, "io"),
        }
    }
}

/// 单文件类型化失败：类别 + 诊断信息
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl FileFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// CSV 报告行
#[derive(Debug, Serialize)]
pub struct ReportRow {
    /// 源文件路径
    pub file: String,
    /// success / skipped / failed
    pub status: &'static str,
    /// 失败类别（成功/跳过时为空）
    pub kind: String,
    /// 诊断信息
    pub detail: String,
    /// 产出文件路径（仅成功时）
    pub output: String,
}
