//! # convert 命令实现
//!
//! 批量转换的控制流：收集候选 -> 宿主预检 -> 逐文件
//! 嗅探/派发/转换 -> 汇总报告。
//!
//! 每个文件的失败（格式不识别、无导入器、导入报错、空场景、导出
//! 报错）都是该文件的终态，记录后继续处理下一个，绝不中断批量。
//! 只有环境性问题（输入目录缺失、宿主找不到、报告写不出）会让
//! 整个命令以错误退出。
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `parsers/sniff.rs`, `host/`, `batch/`
//! - 使用 `utils/output.rs`, `utils/report.rs`

use crate::batch::{BatchRunner, FileCollector, ProcessResult, RunSummary};
use crate::cli::convert::ConvertArgs;
use crate::error::{Result, Step2GlbError};
use crate::host::{BlenderHost, Host, HostOutcome};
use crate::models::job::dest_path;
use crate::models::{ConvertConfig, ConvertJob, ExportOptions, FailureKind, FileFailure};
use crate::parsers;
use crate::utils::{output, report};

use std::fs;
use std::path::Path;

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header("Converting model files to GLB");

    if !args.input.exists() {
        return Err(Step2GlbError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }

    let config = ConvertConfig {
        input_dir: args.input.clone(),
        output_dir: args.output.clone(),
        pattern: args.pattern.clone(),
        recursive: args.recursive,
        overwrite: args.overwrite,
        export: ExportOptions {
            materials: !args.no_materials,
            vertex_colors: !args.no_vertex_colors,
            normals: !args.no_normals,
            texcoords: !args.no_texcoords,
        },
    };

    let host = BlenderHost::new(args.blender.clone());
    let summary = run_batch(&config, &host)?;

    if summary.total() == 0 {
        // run_batch 已给出 "nothing to do" 提示
        return Ok(());
    }

    output::print_done(&format!(
        "Conversion complete: {}/{} files converted ({} skipped)",
        summary.success,
        summary.total(),
        summary.skipped
    ));

    if summary.failed > 0 {
        output::print_warning(&format!("{} file(s) failed:", summary.failed));
        for (source, failure) in summary.failures() {
            output::print_error(&format!("  {}: [{}] {}", source, failure.kind, failure.message));
        }
    }

    if let Some(report_path) = &args.report {
        report::write_csv(&summary, report_path)?;
        output::print_info(&format!("Report written to {}", report_path.display()));
    }

    Ok(())
}

/// 执行一次批量转换
///
/// 宿主以 trait 注入，便于在测试中替换为假实现。
pub fn run_batch(config: &ConvertConfig, host: &dyn Host) -> Result<RunSummary> {
    let files = FileCollector::new(config.input_dir.clone())
        .with_pattern(&config.pattern)?
        .recursive(config.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No model files matched '{}' under {}",
            config.pattern,
            config.input_dir.display()
        ));
        return Ok(RunSummary::default());
    }

    output::print_info(&format!("Found {} candidate file(s)", files.len()));

    // 宿主预检：缺失时报一个明确错误，而不是每个文件失败一遍
    let version = host.version()?;
    output::print_info(&format!("Host: {}", version));

    fs::create_dir_all(&config.output_dir).map_err(|e| Step2GlbError::FileWriteError {
        path: config.output_dir.display().to_string(),
        source: e,
    })?;

    let summary = BatchRunner::new().run(&files, |path| convert_one(path, config, host));
    Ok(summary)
}

/// 转换单个文件
///
/// 状态机：跳过检查 -> 嗅探 -> 导入器派发 -> 宿主执行。
/// 所有失败路径返回 `ProcessResult::Failed`，不向外抛错。
fn convert_one(path: &Path, config: &ConvertConfig, host: &dyn Host) -> ProcessResult {
    let source = path.display().to_string();
    let dest = dest_path(path, &config.output_dir);

    if dest.exists() && !config.overwrite {
        return ProcessResult::Skipped {
            source,
            output: dest.display().to_string(),
        };
    }

    let format = match parsers::detect_format(path) {
        Ok(format) => format,
        Err(Step2GlbError::UnsupportedFormat { reason, .. }) => {
            return ProcessResult::Failed {
                source,
                failure: FileFailure::new(FailureKind::UnsupportedFormat, reason),
            };
        }
        Err(e) => {
            return ProcessResult::Failed {
                source,
                failure: FileFailure::new(FailureKind::Io, e.to_string()),
            };
        }
    };

    if format.import_operator().is_none() {
        // 真正的 STEP 数据宿主读不了，直接给类型化结论，不拿错误
        // 格式的导入器去试
        return ProcessResult::Failed {
            source,
            failure: FileFailure::new(
                FailureKind::NoImporter,
                "Blender has no native STEP importer; install a STEP import \
                 add-on or convert to STL/OBJ first",
            ),
        };
    }

    let job = ConvertJob {
        source: path.to_path_buf(),
        dest: dest.clone(),
        format,
        export: config.export,
    };

    match host.convert(&job) {
        Ok(HostOutcome::Converted) => ProcessResult::Success {
            source,
            output: dest.display().to_string(),
        },
        Ok(HostOutcome::ImportFailed(msg)) => ProcessResult::Failed {
            source,
            failure: FileFailure::new(FailureKind::ImportFailed, msg),
        },
        Ok(HostOutcome::EmptyScene) => ProcessResult::Failed {
            source,
            failure: FileFailure::new(FailureKind::EmptyScene, "import produced no objects"),
        },
        Ok(HostOutcome::ExportFailed(msg)) => ProcessResult::Failed {
            source,
            failure: FileFailure::new(FailureKind::ExportFailed, msg),
        },
        Err(e) => ProcessResult::Failed {
            source,
            failure: FileFailure::new(FailureKind::Host, e.to_string()),
        },
    }
}
