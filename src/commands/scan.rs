//! # scan 命令实现
//!
//! 展开清单并预览将被复制的内容，不执行复制。
//!
//! ## 功能
//! - 逐条展开规格并分类列出
//! - 汇总文件总数与总字节量
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `manifest.rs`, `batch/expander.rs`, `batch/scanner.rs`
//! - 使用 `utils/output.rs`, `utils/format.rs`

use crate::batch::{scanner, PathExpander};
use crate::cli::scan::ScanArgs;
use crate::error::Result;
use crate::manifest;
use crate::models::{EntryKind, PathSpec};
use crate::utils::format::format_size;
use crate::utils::output;

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Manifest Scan");

    let manifest_path = args
        .manifest
        .unwrap_or_else(|| super::exe_dir().join("file.txt"));
    let specs = manifest::read_manifest(&manifest_path)?;
    output::print_info(&format!(
        "Loaded {} path specification(s) from '{}'",
        specs.len(),
        manifest_path.display()
    ));

    if args.verbose {
        list_entries(&specs);
    }

    let totals = scanner::scan_specs(&specs);
    output::print_done(&format!(
        "A copy run would process {} file(s), {} in total",
        totals.files,
        format_size(totals.bytes)
    ));

    Ok(())
}

/// 逐条列出展开结果
fn list_entries(specs: &[PathSpec]) {
    for spec in specs {
        if !spec.is_absolute() {
            output::print_warning(&format!("Skipping non-absolute path [{}]", spec.raw));
            continue;
        }
        if spec.has_wildcard() {
            output::print_info(&format!("Expanding wildcard path: {}", spec.raw));
        }
        for item in PathExpander::new(spec.path()) {
            match item {
                Ok(entry) => match entry.kind {
                    EntryKind::File => println!("  file  {}", entry.path.display()),
                    EntryKind::Directory => println!("  dir   {}", entry.path.display()),
                    EntryKind::Missing => {
                        output::print_skip(&format!("missing {}", entry.path.display()))
                    }
                },
                Err(e) => {
                    output::print_error(&format!("Failed to expand [{}]: {}", spec.raw, e));
                    break;
                }
            }
        }
    }
}
