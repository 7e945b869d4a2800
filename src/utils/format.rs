//! # 数值格式化工具
//!
//! 字节量与耗时的人类可读格式。
//!
//! ## 依赖关系
//! - 被 `commands/copy.rs`, `commands/scan.rs` 使用

use std::time::Duration;

/// 字节量格式化（B/KB/MB/GB，两位小数）
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut order = 0;
    while size >= 1024.0 && order < UNITS.len() - 1 {
        size /= 1024.0;
        order += 1;
    }

    if order == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.2} {}", size, UNITS[order])
    }
}

/// 耗时格式化（mm:ss.ff）
pub fn format_duration(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let hundredths = (total_ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GB");
    }

    #[test]
    fn test_format_size_caps_at_largest_unit() {
        assert_eq!(format_size(2048 * 1024 * 1024 * 1024), "2048.00 GB");
    }

    #[test]
    fn test_format_duration_minutes_seconds() {
        assert_eq!(format_duration(Duration::from_millis(0)), "00:00.00");
        assert_eq!(format_duration(Duration::from_millis(1250)), "00:01.25");
        assert_eq!(format_duration(Duration::from_secs(75)), "01:15.00");
    }
}
