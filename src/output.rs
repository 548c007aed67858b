//! 表示ユーティリティ

use crate::catalog::parse_time;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

/// 成功プレフィックス
pub fn ok_prefix() -> String {
    "✓".green().to_string()
}

/// 情報プレフィックス
pub fn info_prefix() -> String {
    "i".blue().to_string()
}

/// 注意プレフィックス
pub fn warn_prefix() -> String {
    "•".yellow().to_string()
}

/// 相対時刻表示（"3 days ago" など）
///
/// パース不能なタイムスタンプはそのまま返す。
pub fn time_ago(timestamp: &str) -> String {
    let Some(time) = parse_time(timestamp) else {
        return timestamp.to_string();
    };

    let delta = Utc::now().signed_duration_since(time);
    let seconds = delta.num_seconds();

    if seconds < 60 {
        return "just now".to_string();
    }

    let (value, unit) = if seconds < 3600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3600, "hour")
    } else if seconds < 2_592_000 {
        (seconds / 86_400, "day")
    } else if seconds < 31_536_000 {
        (seconds / 2_592_000, "month")
    } else {
        (seconds / 31_536_000, "year")
    };

    if value == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", value, unit)
    }
}

/// 進行中スピナー
pub fn busy_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn stamp(delta: ChronoDuration) -> String {
        (Utc::now() - delta).to_rfc3339()
    }

    #[test]
    fn test_time_ago_just_now() {
        assert_eq!(time_ago(&stamp(ChronoDuration::seconds(5))), "just now");
    }

    #[test]
    fn test_time_ago_minutes() {
        assert_eq!(
            time_ago(&stamp(ChronoDuration::minutes(5))),
            "5 minutes ago"
        );
    }

    #[test]
    fn test_time_ago_singular() {
        assert_eq!(time_ago(&stamp(ChronoDuration::hours(1))), "1 hour ago");
    }

    #[test]
    fn test_time_ago_days() {
        assert_eq!(time_ago(&stamp(ChronoDuration::days(3))), "3 days ago");
    }

    #[test]
    fn test_time_ago_years() {
        assert_eq!(time_ago(&stamp(ChronoDuration::days(800))), "2 years ago");
    }

    #[test]
    fn test_time_ago_unparseable_passthrough() {
        assert_eq!(time_ago("unknown"), "unknown");
    }
}
