//! # copy 命令实现
//!
//! 按清单顺序批量复制文件到目的目录树。
//!
//! ## 功能
//! - 读取清单并预扫描文件总量
//! - 大批量复制前的回车确认
//! - 顺序复制与实时进度/错误显示
//! - 最终统计表格与错误清单，支持 CSV 导出
//!
//! ## 依赖关系
//! - 使用 `cli/copy.rs` 定义的参数
//! - 使用 `manifest.rs`, `batch/`, `models/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`, `utils/format.rs`

use crate::batch::{scanner, CopyRunner};
use crate::cli::copy::CopyArgs;
use crate::error::{BatchcpError, Result};
use crate::manifest;
use crate::models::{CopyEvent, CopyReport};
use crate::utils::format::{format_duration, format_size};
use crate::utils::{output, progress};

use console::{Key, Term};
use std::path::Path;
use tabled::{Table, Tabled};

/// 需要回车确认的预扫描文件数阈值
const CONFIRM_THRESHOLD: usize = 10_000;

/// 统计表格行
#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 执行 copy 命令
pub fn execute(args: CopyArgs) -> Result<()> {
    output::print_header("Batch File Copy");

    let exe_dir = super::exe_dir();
    let manifest_path = args.manifest.unwrap_or_else(|| exe_dir.join("file.txt"));
    let dest_base = args.dest.unwrap_or(exe_dir);

    let specs = manifest::read_manifest(&manifest_path)?;
    output::print_info(&format!(
        "Loaded {} path specification(s) from '{}'",
        specs.len(),
        manifest_path.display()
    ));
    output::print_info(&format!("Destination base: '{}'", dest_base.display()));

    // 预扫描总量，用于进度条与大批量确认
    let spinner = progress::create_scan_spinner("Scanning sources...");
    let totals = scanner::scan_specs(&specs);
    spinner.finish_and_clear();
    output::print_info(&format!(
        "Scan finished: {} file(s), {}",
        totals.files,
        format_size(totals.bytes)
    ));

    if totals.files >= CONFIRM_THRESHOLD && !args.yes {
        output::print_warning(&format!(
            "About to copy {} files. Press Enter to start...",
            totals.files
        ));
        wait_for_enter()?;
    }

    // 顺序复制，事件驱动实时显示
    let pb = progress::create_copy_bar(totals.files as u64);
    let verbose = args.verbose;
    let runner = CopyRunner::new(dest_base);

    let report = runner.run(&specs, |event| match event {
        CopyEvent::SpecStarted { spec, wildcard } => {
            if *wildcard {
                pb.suspend(|| output::print_info(&format!("Expanding wildcard path: {}", spec)));
            }
        }
        CopyEvent::SpecInvalid { spec } => {
            pb.suspend(|| {
                output::print_warning(&format!("Skipping non-absolute path [{}]", spec))
            });
        }
        CopyEvent::FileCopied { source, dest, .. } => {
            if verbose {
                pb.suspend(|| {
                    output::print_copy(
                        &source.display().to_string(),
                        &dest.display().to_string(),
                    )
                });
            }
            pb.inc(1);
        }
        CopyEvent::PathMissing { path } => {
            pb.suspend(|| {
                output::print_warning(&format!("Path does not exist [{}]", path.display()))
            });
        }
        CopyEvent::CopyFailed { path, reason } => {
            pb.suspend(|| output::print_error(&format!("{}: {}", path.display(), reason)));
            pb.inc(1);
        }
        CopyEvent::ExpandFailed { spec, reason } => {
            pb.suspend(|| output::print_error(&format!("Failed to expand [{}]: {}", spec, reason)));
        }
    });

    pb.finish_and_clear();

    print_summary(&report);

    if let Some(ref log_path) = args.error_log {
        if report.is_clean() {
            output::print_info("No errors to export.");
        } else {
            export_error_log(&report, log_path)?;
            output::print_success(&format!("Error list written to '{}'", log_path.display()));
        }
    }

    Ok(())
}

/// 打印最终统计与错误清单
fn print_summary(report: &CopyReport) {
    output::print_header("Copy Results");

    let rows = vec![
        SummaryRow {
            metric: "Files copied",
            value: report.files_copied.to_string(),
        },
        SummaryRow {
            metric: "Directories created",
            value: report.dirs_created.to_string(),
        },
        SummaryRow {
            metric: "Total size",
            value: format_size(report.total_bytes),
        },
        SummaryRow {
            metric: "Elapsed",
            value: format_duration(report.elapsed),
        },
        SummaryRow {
            metric: "Files succeeded",
            value: report.files_succeeded.to_string(),
        },
        SummaryRow {
            metric: "Wildcard paths",
            value: report.wildcard_specs.to_string(),
        },
        SummaryRow {
            metric: "Invalid paths",
            value: report.invalid_paths.to_string(),
        },
        SummaryRow {
            metric: "Errors",
            value: report.errors.len().to_string(),
        },
    ];
    println!("{}", Table::new(rows));

    if report.is_clean() {
        output::print_done("No errors were recorded during this run.");
        return;
    }

    output::print_header("Error Log");
    output::print_warning(&format!(
        "{} error(s) occurred during processing:",
        report.errors.len()
    ));
    println!();
    for (index, error) in report.errors.iter().enumerate() {
        output::print_error_record(index + 1, &error.path, &error.reason);
        output::print_separator();
    }
}

/// 阻塞等待回车
fn wait_for_enter() -> Result<()> {
    let term = Term::stdout();
    loop {
        let key = term
            .read_key()
            .map_err(|e| BatchcpError::ConsoleReadError { source: e })?;
        if key == Key::Enter {
            return Ok(());
        }
    }
}

/// 导出错误清单为 CSV
fn export_error_log(report: &CopyReport, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(BatchcpError::CsvError)?;

    for error in &report.errors {
        wtr.serialize(error).map_err(BatchcpError::CsvError)?;
    }

    wtr.flush().map_err(|e| BatchcpError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
