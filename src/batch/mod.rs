//! # 批量复制核心模块
//!
//! 路径展开与顺序复制引擎。
//!
//! ## 功能
//! - 通配符路径逐段展开
//! - 目的路径推导与缺失目录创建
//! - 顺序复制、统计累加与错误隔离
//! - 复制前预扫描
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `glob` 匹配通配符段
//! - 使用 `walkdir` 遍历目录子树

pub mod dest;
pub mod expander;
pub mod runner;
pub mod scanner;

pub use expander::PathExpander;
pub use runner::CopyRunner;
