//! サマリーセクション
//!
//! Discover 画面の「Featured / Most popular / Recently added」。
//! いずれも絞り込み済みの一覧から先頭 SECTION_LIMIT 件を切り出す
//! 表示用スライスであり、独立したアルゴリズムではない。

use super::plugin::Plugin;
use std::cmp::Ordering;

/// 各セクションの表示件数
pub const SECTION_LIMIT: usize = 5;

/// おすすめ（featured > 0、featured 降順）
pub fn featured<'a>(selected: &[&'a Plugin]) -> Vec<&'a Plugin> {
    let mut section: Vec<&Plugin> = selected
        .iter()
        .copied()
        .filter(|p| p.featured > 0)
        .collect();
    section.sort_by(|a, b| b.featured.cmp(&a.featured));
    section.truncate(SECTION_LIMIT);
    section
}

/// 人気（popularity 降順）
pub fn most_popular<'a>(selected: &[&'a Plugin]) -> Vec<&'a Plugin> {
    let mut section: Vec<&Plugin> = selected.to_vec();
    section.sort_by(|a, b| {
        b.popularity
            .partial_cmp(&a.popularity)
            .unwrap_or(Ordering::Equal)
    });
    section.truncate(SECTION_LIMIT);
    section
}

/// 新着（公開日時降順、パース不能は末尾）
pub fn recently_added<'a>(selected: &[&'a Plugin]) -> Vec<&'a Plugin> {
    let mut section: Vec<&Plugin> = selected.to_vec();
    section.sort_by(|a, b| match (a.created_time(), b.created_time()) {
        (Some(at), Some(bt)) => bt.cmp(&at),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    section.truncate(SECTION_LIMIT);
    section
}

#[cfg(test)]
#[path = "sections_test.rs"]
mod tests;
