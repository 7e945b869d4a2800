//! # scan 子命令 CLI 定义
//!
//! 展开清单并预览将被复制的内容
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Manifest file with one source path per line (defaults to file.txt next to the executable)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// List every resolved entry instead of only the totals
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
