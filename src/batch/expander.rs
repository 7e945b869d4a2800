//! # 路径展开器
//!
//! 将一条路径规格惰性展开为具体文件系统条目。
//!
//! ## 功能
//! - 字面路径按存在性分类（文件/目录/不存在）
//! - 通配符逐段展开：每次只匹配父目录的直接子项
//! - 显式工作栈迭代，深树不增加调用栈深度
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `batch/scanner.rs`, `commands/scan.rs` 驱动
//! - 使用 `glob` 进行单段模式匹配

use crate::error::{BatchcpError, Result};
use crate::models::spec::contains_wildcard;
use crate::models::ResolvedEntry;

use std::collections::VecDeque;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// 路径展开器
///
/// 迭代产出 `ResolvedEntry`：
/// - 无通配符的现存文件/目录原样产出，不存在则产出 `Missing`；
/// - 通配符候选以最后一段为模式匹配父目录的直接子项，匹配到的
///   子目录追加 `*` 压回栈中向下一层继续展开，匹配到的文件直接产出。
///
/// 目录枚举失败与非法模式以 `Err` 产出，由调用方按整条规格处理；
/// 模式匹配不到任何条目时不产出结果，也不报错。
pub struct PathExpander {
    /// 待展开的候选路径栈
    stack: Vec<PathBuf>,
    /// 当前层已匹配、待产出的文件条目
    ready: VecDeque<ResolvedEntry>,
}

impl PathExpander {
    /// 从一条规格路径创建展开器
    pub fn new(spec: &Path) -> Self {
        PathExpander {
            stack: vec![normalize(spec)],
            ready: VecDeque::new(),
        }
    }

    /// 展开一个含通配符的候选
    ///
    /// 父目录不存在视为无匹配，静默丢弃。
    fn expand_candidate(&mut self, candidate: &Path) -> Result<()> {
        let (Some(parent), Some(segment)) = (candidate.parent(), candidate.file_name()) else {
            return Ok(());
        };
        if !parent.is_dir() {
            return Ok(());
        }

        let segment = segment.to_string_lossy();
        let pattern = glob::Pattern::new(&segment).map_err(|e| BatchcpError::InvalidPattern {
            pattern: segment.to_string(),
            reason: e.to_string(),
        })?;

        let entries = fs::read_dir(parent).map_err(|e| BatchcpError::DirReadError {
            path: parent.display().to_string(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| BatchcpError::DirReadError {
                path: parent.display().to_string(),
                source: e,
            })?;
            if !pattern.matches(&entry.file_name().to_string_lossy()) {
                continue;
            }

            let path = entry.path();
            if path.is_dir() {
                // 追加 `*` 压回栈中，使展开严格逐层深入
                self.stack.push(path.join("*"));
            } else {
                self.ready.push_back(ResolvedEntry::file(path));
            }
        }

        Ok(())
    }
}

impl Iterator for PathExpander {
    type Item = Result<ResolvedEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.ready.pop_front() {
                return Some(Ok(entry));
            }

            let candidate = self.stack.pop()?;

            if !contains_wildcard(&candidate.to_string_lossy()) {
                // 无通配符的候选只能是原始规格本身
                let entry = if candidate.is_file() {
                    ResolvedEntry::file(candidate)
                } else if candidate.is_dir() {
                    ResolvedEntry::directory(candidate)
                } else {
                    ResolvedEntry::missing(candidate)
                };
                return Some(Ok(entry));
            }

            if let Err(e) = self.expand_candidate(&candidate) {
                return Some(Err(e));
            }
        }
    }
}

/// 词法归一化：消去 `.` 与 `..` 段，不访问文件系统
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
