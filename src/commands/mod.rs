//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `manifest.rs`, `batch/`, `models/`, `utils/`
//! - 子模块: copy, scan

pub mod copy;
pub mod scan;

use crate::cli::Commands;
use crate::error::Result;

use std::path::{Path, PathBuf};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Copy(args) => copy::execute(args),
        Commands::Scan(args) => scan::execute(args),
    }
}

/// 可执行文件所在目录（默认清单与目的基目录的锚点）
pub(crate) fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
