//! # 数据模型模块
//!
//! 定义路径规格、解析条目与复制结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: spec, entry, report

pub mod entry;
pub mod report;
pub mod spec;

pub use entry::{EntryKind, ResolvedEntry};
pub use report::{CopyError, CopyEvent, CopyReport};
pub use spec::PathSpec;
