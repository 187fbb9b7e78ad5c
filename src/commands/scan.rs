//! # scan 命令实现
//!
//! 预演：收集候选文件并嗅探实际格式，打印 convert 将会做什么。
//! 不创建输出目录，不启动宿主。
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `batch/collector.rs`, `parsers/sniff.rs`
//! - 使用 `tabled` 打印结果表格

use crate::batch::FileCollector;
use crate::cli::scan::ScanArgs;
use crate::error::{Result, Step2GlbError};
use crate::models::job::normalize_stem;
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 扫描结果行
#[derive(Tabled)]
struct ScanRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Detected")]
    detected: String,
    #[tabled(rename = "Importer")]
    importer: String,
    #[tabled(rename = "Planned output")]
    planned: String,
}

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Scanning model files");

    if !args.input.exists() {
        return Err(Step2GlbError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No model files matched '{}' under {}",
            args.pattern,
            args.input.display()
        ));
        return Ok(());
    }

    let mut convertible = 0usize;
    let rows: Vec<ScanRow> = files
        .iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("model");
            let planned = format!("{}.glb", normalize_stem(stem));

            let (detected, importer) = match parsers::detect_format(path) {
                Ok(format) => {
                    let importer = match format.import_operator() {
                        Some(op) => {
                            convertible += 1;
                            op.to_string()
                        }
                        None => "(none available)".to_string(),
                    };
                    (format.to_string(), importer)
                }
                Err(_) => ("unknown".to_string(), "-".to_string()),
            };

            ScanRow {
                file: path.display().to_string(),
                detected,
                importer,
                planned,
            }
        })
        .collect();

    println!("{}", Table::new(&rows));
    println!();
    output::print_info(&format!(
        "{} of {} candidate(s) have a usable importer",
        convertible,
        files.len()
    ));

    Ok(())
}
