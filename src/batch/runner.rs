//! # 批量执行器
//!
//! 逐个文件顺序执行转换任务，汇总类型化结果。
//!
//! ## 功能
//! - 串行迭代（宿主场景是唯一共享资源，不可并行）
//! - 进度条显示，诊断信息经 `suspend` 打印避免撕裂
//! - 单文件失败不中断批量，全部记录进 `RunSummary`
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `utils/progress.rs`, `utils/output.rs`
//! - 使用 `models/outcome.rs` 的 FileFailure

use crate::models::FileFailure;
use crate::utils::{output, progress};

use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 转换成功
    Success { source: String, output: String },
    /// 跳过（输出已存在且未指定 --overwrite）
    Skipped { source: String, output: String },
    /// 转换失败
    Failed { source: String, failure: FileFailure },
}

/// 批量运行汇总
#[derive(Debug, Default)]
pub struct RunSummary {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 全部单文件结果，按处理顺序
    pub results: Vec<ProcessResult>,
}

impl RunSummary {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match &result {
            ProcessResult::Success { .. } => self.success += 1,
            ProcessResult::Skipped { .. } => self.skipped += 1,
            ProcessResult::Failed { .. } => self.failed += 1,
        }
        self.results.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }

    /// 失败明细
    pub fn failures(&self) -> impl Iterator<Item = (&str, &FileFailure)> {
        self.results.iter().filter_map(|r| match r {
            ProcessResult::Failed { source, failure } => Some((source.as_str(), failure)),
            _ => None,
        })
    }
}

/// 批量执行器
pub struct BatchRunner;

impl BatchRunner {
    pub fn new() -> Self {
        Self
    }

    /// 顺序处理文件列表
    pub fn run<F>(&self, files: &[PathBuf], mut processor: F) -> RunSummary
    where
        F: FnMut(&Path) -> ProcessResult,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Converting");
        let mut summary = RunSummary::default();

        for file in files {
            let result = processor(file);

            pb.suspend(|| match &result {
                ProcessResult::Success { source, output: dest } => {
                    output::print_conversion(source, dest);
                }
                ProcessResult::Skipped { output: dest, .. } => {
                    output::print_skip(&format!("{} (output exists)", dest));
                }
                ProcessResult::Failed { source, failure } => {
                    output::print_error(&format!(
                        "{}: [{}] {}",
                        source, failure.kind, failure.message
                    ));
                }
            });

            summary.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        summary
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}
