//! # 顺序复制执行器
//!
//! 按清单顺序驱动路径展开并执行复制，累加统计与错误。
//!
//! ## 功能
//! - 非绝对路径规格拒绝
//! - 文件条目覆盖复制，目录条目整棵子树复制
//! - 单条目失败隔离：记录后批次继续
//! - 过程事件回调供表示层订阅
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs` 调用
//! - 使用 `batch/expander.rs`, `batch/dest.rs`
//! - 使用 `walkdir` 遍历目录子树

use crate::batch::{dest, PathExpander};
use crate::error::{BatchcpError, Result};
use crate::models::{CopyEvent, CopyReport, EntryKind, PathSpec};

use std::error::Error as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// 顺序复制执行器
///
/// 严格单线程：规格逐条处理，条目逐个复制，顺序即展开顺序。
pub struct CopyRunner {
    /// 目的基目录
    dest_base: PathBuf,
}

impl CopyRunner {
    /// 创建指向目的基目录的执行器
    pub fn new(dest_base: impl Into<PathBuf>) -> Self {
        CopyRunner {
            dest_base: dest_base.into(),
        }
    }

    /// 按清单顺序处理全部规格，返回最终统计
    ///
    /// 过程事件经 `observer` 实时回调。此层没有致命错误：
    /// 单条失败只影响自身条目或规格，批次总是走完。
    pub fn run<F>(&self, specs: &[PathSpec], mut observer: F) -> CopyReport
    where
        F: FnMut(&CopyEvent),
    {
        let start = Instant::now();
        let mut report = CopyReport::default();

        for spec in specs {
            self.process_spec(spec, &mut report, &mut observer);
        }

        report.elapsed = start.elapsed();
        report
    }

    /// 处理单条规格
    fn process_spec<F>(&self, spec: &PathSpec, report: &mut CopyReport, observer: &mut F)
    where
        F: FnMut(&CopyEvent),
    {
        if !spec.is_absolute() {
            report.record_invalid(spec.raw.as_str(), "not an absolute path");
            observer(&CopyEvent::SpecInvalid {
                spec: spec.raw.clone(),
            });
            return;
        }

        let wildcard = spec.has_wildcard();
        if wildcard {
            report.wildcard_specs += 1;
        }
        observer(&CopyEvent::SpecStarted {
            spec: spec.raw.clone(),
            wildcard,
        });

        for item in PathExpander::new(spec.path()) {
            let entry = match item {
                Ok(entry) => entry,
                // 展开失败终止本条规格，按原始规格文本记录
                Err(e) => {
                    let reason = reason_text(&e);
                    report.record_error(spec.raw.as_str(), reason.as_str());
                    observer(&CopyEvent::ExpandFailed {
                        spec: spec.raw.clone(),
                        reason,
                    });
                    return;
                }
            };

            match entry.kind {
                EntryKind::File => self.copy_entry(&entry.path, report, observer),
                EntryKind::Directory => self.copy_tree(&entry.path, report, observer),
                EntryKind::Missing => {
                    report.record_invalid(
                        entry.path.display().to_string(),
                        "path does not exist",
                    );
                    observer(&CopyEvent::PathMissing { path: entry.path });
                }
            }
        }
    }

    /// 复制整棵目录子树下的所有文件
    ///
    /// 单个文件失败或遍历错误只记录该路径，子树遍历继续。
    fn copy_tree<F>(&self, dir: &Path, report: &mut CopyReport, observer: &mut F)
    where
        F: FnMut(&CopyEvent),
    {
        for item in WalkDir::new(dir) {
            match item {
                Ok(entry) if entry.file_type().is_file() => {
                    self.copy_entry(entry.path(), report, observer);
                }
                Ok(_) => {}
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| dir.display().to_string());
                    let reason = e.to_string();
                    report.record_error(path.as_str(), reason.as_str());
                    observer(&CopyEvent::CopyFailed {
                        path: PathBuf::from(path),
                        reason,
                    });
                }
            }
        }
    }

    /// 复制单个文件条目，失败记录后返回
    fn copy_entry<F>(&self, source: &Path, report: &mut CopyReport, observer: &mut F)
    where
        F: FnMut(&CopyEvent),
    {
        match self.copy_file(source) {
            Ok((dest, bytes, dirs_created)) => {
                report.record_copied(bytes, dirs_created);
                observer(&CopyEvent::FileCopied {
                    source: source.to_path_buf(),
                    dest,
                    bytes,
                });
            }
            Err(e) => {
                let reason = reason_text(&e);
                report.record_error(source.display().to_string(), reason.as_str());
                observer(&CopyEvent::CopyFailed {
                    path: source.to_path_buf(),
                    reason,
                });
            }
        }
    }

    /// 推导目的路径、补全目录并覆盖复制
    fn copy_file(&self, source: &Path) -> Result<(PathBuf, u64, usize)> {
        let dest = dest::dest_path(source, &self.dest_base);
        let dirs_created = dest::ensure_parent_dirs(&dest)?;
        let bytes = fs::copy(source, &dest).map_err(|e| BatchcpError::FileCopyError {
            path: source.display().to_string(),
            source: e,
        })?;
        Ok((dest, bytes, dirs_created))
    }
}

/// 错误展示文本，附带底层原因
fn reason_text(err: &BatchcpError) -> String {
    match err.source() {
        Some(cause) => format!("{} ({})", err, cause),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn run_specs(dest_base: &Path, lines: &[String]) -> CopyReport {
        let specs: Vec<PathSpec> = lines.iter().map(|l| PathSpec::new(l.as_str())).collect();
        CopyRunner::new(dest_base).run(&specs, |_| {})
    }

    fn path_line(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_mixed_manifest_scenario() {
        let tmp = tempfile::tempdir().unwrap();
        let dest_base = tmp.path().join("dst");
        write_file(&tmp.path().join("src/single.txt"), "one");
        write_file(&tmp.path().join("tree/f1.txt"), "f1");
        write_file(&tmp.path().join("tree/f2.txt"), "f2");
        write_file(&tmp.path().join("tree/sub/f3.txt"), "f3");

        let report = run_specs(
            &dest_base,
            &[
                path_line(&tmp.path().join("src/single.txt")),
                path_line(&tmp.path().join("tree")),
                path_line(&tmp.path().join("nothere.txt")),
            ],
        );

        assert_eq!(report.files_copied, 4);
        assert_eq!(report.files_succeeded, 4);
        assert_eq!(report.invalid_paths, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].reason, "path does not exist");

        let copied = dest::dest_path(&tmp.path().join("tree/sub/f3.txt"), &dest_base);
        assert_eq!(fs::read_to_string(copied).unwrap(), "f3");
    }

    #[test]
    fn test_relative_spec_rejected() {
        let tmp = tempfile::tempdir().unwrap();

        let report = run_specs(&tmp.path().join("dst"), &["subdir/file.txt".to_string()]);

        assert_eq!(report.files_copied, 0);
        assert_eq!(report.invalid_paths, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "subdir/file.txt");
        assert_eq!(report.errors[0].reason, "not an absolute path");
    }

    #[test]
    fn test_wildcard_spec_copies_matches() {
        let tmp = tempfile::tempdir().unwrap();
        let dest_base = tmp.path().join("dst");
        write_file(&tmp.path().join("logs/a.log"), "aa");
        write_file(&tmp.path().join("logs/b.log"), "bb");
        write_file(&tmp.path().join("logs/c.txt"), "cc");

        let report = run_specs(&dest_base, &[path_line(&tmp.path().join("logs/*.log"))]);

        assert_eq!(report.wildcard_specs, 1);
        assert_eq!(report.files_copied, 2);
        assert!(report.is_clean());
        assert!(dest::dest_path(&tmp.path().join("logs/a.log"), &dest_base).is_file());
        assert!(!dest::dest_path(&tmp.path().join("logs/c.txt"), &dest_base).exists());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dest_base = tmp.path().join("dst");
        write_file(&tmp.path().join("data/a.txt"), "same");
        let lines = [path_line(&tmp.path().join("data/a.txt"))];

        let first = run_specs(&dest_base, &lines);
        let second = run_specs(&dest_base, &lines);

        assert_eq!(first.files_copied, 1);
        assert_eq!(second.files_copied, 1);
        assert!(first.dirs_created > 0);
        assert_eq!(second.dirs_created, 0);

        let copied = dest::dest_path(&tmp.path().join("data/a.txt"), &dest_base);
        assert_eq!(fs::read_to_string(copied).unwrap(), "same");
    }

    #[test]
    fn test_copy_overwrites_existing_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let dest_base = tmp.path().join("dst");
        let source = tmp.path().join("data/a.txt");
        write_file(&source, "new content");

        let dest = dest::dest_path(&source, &dest_base);
        write_file(&dest, "stale");

        let report = run_specs(&dest_base, &[path_line(&source)]);

        assert_eq!(report.files_copied, 1);
        assert_eq!(fs::read_to_string(dest).unwrap(), "new content");
    }

    #[test]
    fn test_byte_count_matches_copied_sources() {
        let tmp = tempfile::tempdir().unwrap();
        let dest_base = tmp.path().join("dst");
        write_file(&tmp.path().join("data/a.txt"), "abc");
        write_file(&tmp.path().join("data/b.txt"), "hello");

        let report = run_specs(&dest_base, &[path_line(&tmp.path().join("data"))]);

        assert!(report.is_clean());
        assert_eq!(report.files_copied, 2);
        assert_eq!(report.total_bytes, 3 + 5);
    }

    #[test]
    fn test_events_mirror_report() {
        let tmp = tempfile::tempdir().unwrap();
        let dest_base = tmp.path().join("dst");
        write_file(&tmp.path().join("data/a.txt"), "x");

        let specs = vec![
            PathSpec::new(path_line(&tmp.path().join("data/a.txt"))),
            PathSpec::new("relative.txt"),
            PathSpec::new(path_line(&tmp.path().join("gone.txt"))),
        ];

        let mut copied = 0;
        let mut invalid = 0;
        let mut missing = 0;
        let report = CopyRunner::new(&dest_base).run(&specs, |event| match event {
            CopyEvent::FileCopied { .. } => copied += 1,
            CopyEvent::SpecInvalid { .. } => invalid += 1,
            CopyEvent::PathMissing { .. } => missing += 1,
            _ => {}
        });

        assert_eq!(copied, report.files_copied);
        assert_eq!(invalid, 1);
        assert_eq!(missing, 1);
        assert_eq!(report.invalid_paths, 2);
    }

    #[test]
    fn test_batch_continues_after_entry_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let dest_base = tmp.path().join("dst");
        write_file(&tmp.path().join("data/ok.txt"), "fine");

        let report = run_specs(
            &dest_base,
            &[
                path_line(&tmp.path().join("gone-first.txt")),
                path_line(&tmp.path().join("data/ok.txt")),
            ],
        );

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.files_copied, 1);
        assert!(dest::dest_path(&tmp.path().join("data/ok.txt"), &dest_base).is_file());
    }
}
