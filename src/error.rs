//! # 统一错误处理模块
//!
//! 定义 batchcp 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// batchcp 统一错误类型
#[derive(Error, Debug)]
pub enum BatchcpError {
    // ─────────────────────────────────────────────────────────────
    // 启动错误
    // ─────────────────────────────────────────────────────────────
    #[error("Manifest file not found: {path}")]
    ManifestNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy file: {path}")]
    FileCopyError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory: {path}")]
    DirCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory: {path}")]
    DirReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 路径展开错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid wildcard pattern: {pattern}\nReason: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 终端交互错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read console input")]
    ConsoleReadError {
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, BatchcpError>;
