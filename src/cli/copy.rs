//! # copy 子命令 CLI 定义
//!
//! 按清单批量复制文件到目的目录树
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/copy.rs`

use clap::Args;
use std::path::PathBuf;

/// copy 子命令参数
#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Manifest file with one source path per line (defaults to file.txt next to the executable)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Destination base directory (defaults to the executable's directory)
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Start copying without the large-batch confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,

    /// Print every copied file
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Write the error list to a CSV file after the run
    #[arg(long)]
    pub error_log: Option<PathBuf>,
}
