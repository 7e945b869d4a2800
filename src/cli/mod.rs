//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `copy`: 按清单批量复制
//! - `scan`: 清单展开预览（不复制）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: copy, scan

pub mod copy;
pub mod scan;

use clap::{Parser, Subcommand};

/// batchcp - 清单驱动的批量文件复制工具
#[derive(Parser)]
#[command(name = "batchcp")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A manifest-driven batch file copy tool", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Copy every file listed in the manifest into the destination tree
    Copy(copy::CopyArgs),

    /// Expand the manifest and preview what a copy run would process
    Scan(scan::ScanArgs),
}
