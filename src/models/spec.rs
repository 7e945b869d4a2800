//! # 路径规格数据模型
//!
//! 清单中的一行：原始文本及其判定属性。
//!
//! ## 依赖关系
//! - 被 `manifest.rs` 构造
//! - 被 `batch/runner.rs`, `batch/scanner.rs` 使用

use std::path::Path;

/// 清单中的一条路径规格
///
/// 读入后不再变化；是否可处理由 `is_absolute` 判定。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    /// 清单原始文本
    pub raw: String,
}

impl PathSpec {
    /// 从一行清单文本创建规格
    pub fn new(raw: impl Into<String>) -> Self {
        PathSpec { raw: raw.into() }
    }

    /// 路径视图
    pub fn path(&self) -> &Path {
        Path::new(&self.raw)
    }

    /// 是否为绝对路径（处理资格判定）
    pub fn is_absolute(&self) -> bool {
        self.path().is_absolute()
    }

    /// 是否包含通配符
    pub fn has_wildcard(&self) -> bool {
        contains_wildcard(&self.raw)
    }
}

/// 判断文本是否含有通配符（`*` 或 `?`）
pub fn contains_wildcard(text: &str) -> bool {
    text.contains(|c| c == '*' || c == '?')
}
