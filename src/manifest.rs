//! # 清单读取模块
//!
//! 读取清单文件（每行一条路径规格），跳过空白行。
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs`, `commands/scan.rs` 使用
//! - 构造 `models/spec.rs` 的 `PathSpec`

use crate::error::{BatchcpError, Result};
use crate::models::PathSpec;

use std::fs;
use std::path::Path;

/// 读取清单文件，返回按行顺序的路径规格
///
/// 清单缺失是唯一的致命错误；空白行与行尾回车被忽略。
pub fn read_manifest(path: &Path) -> Result<Vec<PathSpec>> {
    if !path.is_file() {
        return Err(BatchcpError::ManifestNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| BatchcpError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(content
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .map(PathSpec::new)
        .collect())
}
