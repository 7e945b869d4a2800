//! # 解析条目数据模型
//!
//! 路径展开产生的具体文件系统条目及其分类。
//!
//! ## 依赖关系
//! - 被 `batch/expander.rs` 构造
//! - 被 `batch/runner.rs`, `batch/scanner.rs`, `commands/scan.rs` 消费

use std::path::PathBuf;

/// 条目类别，按解析时刻的文件系统现状判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 现存文件
    File,
    /// 现存目录
    Directory,
    /// 路径不存在
    Missing,
}

/// 展开后的具体条目
///
/// `Missing` 只会由字面（无通配符）规格产生；通配符展开
/// 匹配不到任何条目时不产出结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// 绝对路径，不含通配符
    pub path: PathBuf,
    /// 条目类别
    pub kind: EntryKind,
}

impl ResolvedEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ResolvedEntry {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        ResolvedEntry {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn missing(path: impl Into<PathBuf>) -> Self {
        ResolvedEntry {
            path: path.into(),
            kind: EntryKind::Missing,
        }
    }
}
