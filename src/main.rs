//! # batchcp - 清单驱动的批量文件复制工具
//!
//! 读取清单中的路径规格（绝对文件/目录/通配符模式），展开为具体
//! 文件后按原根相对结构复制到目的目录树，并汇报统计与错误。
//!
//! ## 子命令
//! - `copy` - 按清单批量复制
//! - `scan` - 展开清单并预览将处理的内容
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── manifest.rs (清单读取)
//!   │     ├── batch/      (展开与复制核心)
//!   │     └── models/     (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod manifest;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
