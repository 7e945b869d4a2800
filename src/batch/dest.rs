//! # 目的路径推导
//!
//! 源路径去除卷/根前缀后拼接到目的基目录，缺失目录逐段创建。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 无外部 crate 依赖

use crate::error::{BatchcpError, Result};

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// 去除根/卷前缀，保留相对剩余部分
pub fn strip_root(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect()
}

/// 目的路径推导：`base` 拼接 `source` 的去根剩余部分
///
/// 只由源路径与基目录决定。不同根前缀、相同相对后缀的源
/// 会映射到同一目的路径并相互覆盖。
pub fn dest_path(source: &Path, base: &Path) -> PathBuf {
    base.join(strip_root(source))
}

/// 自浅向深逐段创建目的文件缺失的祖先目录，返回新建数量
///
/// 已存在的目录不报错（幂等）。
pub fn ensure_parent_dirs(dest_file: &Path) -> Result<usize> {
    let Some(parent) = dest_file.parent() else {
        return Ok(0);
    };

    let mut chain: Vec<&Path> = parent.ancestors().collect();
    chain.reverse();

    let mut created = 0;
    for dir in chain {
        if dir.as_os_str().is_empty() || dir.exists() {
            continue;
        }
        match fs::create_dir(dir) {
            Ok(()) => created += 1,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => {
                return Err(BatchcpError::DirCreateError {
                    path: dir.display().to_string(),
                    source: e,
                })
            }
        }
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_root_removes_leading_separator() {
        assert_eq!(
            strip_root(Path::new("/var/log/app.txt")),
            PathBuf::from("var/log/app.txt")
        );
    }

    #[cfg(windows)]
    #[test]
    fn test_strip_root_removes_drive_prefix() {
        assert_eq!(
            strip_root(Path::new(r"C:\data\a.txt")),
            PathBuf::from(r"data\a.txt")
        );
        // 不同盘符、相同后缀映射到同一目的路径
        assert_eq!(
            dest_path(Path::new(r"C:\data\a.txt"), Path::new(r"D:\out")),
            dest_path(Path::new(r"E:\data\a.txt"), Path::new(r"D:\out"))
        );
    }

    #[test]
    fn test_dest_path_is_pure_join() {
        assert_eq!(
            dest_path(Path::new("/data/sub/a.txt"), Path::new("/out")),
            PathBuf::from("/out/data/sub/a.txt")
        );
        // 相同输入总是产生相同输出
        assert_eq!(
            dest_path(Path::new("/data/sub/a.txt"), Path::new("/out")),
            dest_path(Path::new("/data/sub/a.txt"), Path::new("/out"))
        );
    }

    #[test]
    fn test_ensure_parent_dirs_counts_new_segments() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("a/b/c/file.txt");

        let created = ensure_parent_dirs(&dest).unwrap();
        assert_eq!(created, 3);
        assert!(tmp.path().join("a/b/c").is_dir());
    }

    #[test]
    fn test_ensure_parent_dirs_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("x/y/file.txt");

        assert_eq!(ensure_parent_dirs(&dest).unwrap(), 2);
        assert_eq!(ensure_parent_dirs(&dest).unwrap(), 0);
    }
}
