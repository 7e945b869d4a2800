//! # 复制前预扫描
//!
//! 估算一次复制将处理的文件总数与总字节数。
//!
//! ## 功能
//! - 与复制流程同构的遍历（展开 + 目录子树）
//! - 忽略所有错误：不可访问的路径不计入总量
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs` 用于进度条总量与大批量确认
//! - 被 `commands/scan.rs` 用于汇总显示
//! - 使用 `batch/expander.rs` 与 `walkdir`

use crate::batch::PathExpander;
use crate::models::{EntryKind, PathSpec};

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// 预扫描汇总
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanTotals {
    /// 将处理的文件数
    pub files: usize,
    /// 将复制的总字节数
    pub bytes: u64,
}

impl ScanTotals {
    fn add_file(&mut self, path: &Path) {
        self.files += 1;
        if let Ok(meta) = fs::metadata(path) {
            self.bytes += meta.len();
        }
    }
}

/// 估算清单的处理总量
///
/// 非绝对路径跳过；展开错误终止该条规格的估算，与复制时
/// 的规格级错误处理一致。
pub fn scan_specs(specs: &[PathSpec]) -> ScanTotals {
    let mut totals = ScanTotals::default();

    for spec in specs {
        if !spec.is_absolute() {
            continue;
        }
        for entry in PathExpander::new(spec.path()) {
            let Ok(entry) = entry else { break };
            match entry.kind {
                EntryKind::File => totals.add_file(&entry.path),
                EntryKind::Directory => {
                    for file in WalkDir::new(&entry.path)
                        .into_iter()
                        .filter_map(|e| e.ok())
                        .filter(|e| e.file_type().is_file())
                    {
                        totals.add_file(file.path());
                    }
                }
                EntryKind::Missing => {}
            }
        }
    }

    totals
}
