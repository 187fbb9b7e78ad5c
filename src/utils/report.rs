//! # 运行报告导出
//!
//! 将批量运行的单文件结果写成 CSV，使结果可被机器检查，
//! 而不只是控制台文本。
//!
//! ## 列格式
//! - file: 源文件路径
//! - status: success / skipped / failed
//! - kind: 失败类别（成功/跳过时为空）
//! - detail: 诊断信息
//! - output: 产出文件路径（仅成功/跳过时）
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `csv` 库写入，行结构由 `serde` 序列化

use crate::batch::{ProcessResult, RunSummary};
use crate::error::{Result, Step2GlbError};
use crate::models::ReportRow;

use std::path::Path;

/// 将运行汇总写为 CSV 报告
pub fn write_csv(summary: &RunSummary, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(Step2GlbError::CsvError)?;

    for result in &summary.results {
        wtr.serialize(to_row(result)).map_err(Step2GlbError::CsvError)?;
    }

    wtr.flush().map_err(|e| Step2GlbError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

fn to_row(result: &ProcessResult) -> ReportRow {
    match result {
        ProcessResult::Success { source, output } => ReportRow {
            file: source.clone(),
            status: "success",
            kind: String::new(),
            detail: String::new(),
            output: output.clone(),
        },
        ProcessResult::Skipped { source, output } => ReportRow {
            file: source.clone(),
            status: "skipped",
            kind: String::new(),
            detail: "output exists".to_string(),
            output: output.clone(),
        },
        ProcessResult::Failed { source, failure } => ReportRow {
            file: source.clone(),
            status: "failed",
            kind: failure.kind.to_string(),
            detail: failure.message.clone(),
            output: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FailureKind, FileFailure};

    #[test]
    fn test_write_csv() {
        let mut summary = RunSummary::default();
        summary.merge(ProcessResult::Success {
            source: "in/a.stp".into(),
            output: "out/a.glb".into(),
        });
        summary.merge(ProcessResult::Failed {
            source: "in/b.stp".into(),
            failure: FileFailure::new(FailureKind::NoImporter, "no STEP importer"),
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_csv(&summary, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("file,status,kind,detail,output"));
        assert!(content.contains("in/a.stp,success,,,out/a.glb"));
        assert!(content.contains("in/b.stp,failed,no-importer,no STEP importer,"));
    }
}
