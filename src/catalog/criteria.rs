//! 絞り込み・ソート条件
//!
//! ルーティング層（クエリ文字列相当）が所有する一時的なUI状態。
//! 永続化はしない。

use super::plugin::Plugin;
use clap::ValueEnum;
use std::cmp::Ordering;

/// 種別フィルタの全件センチネル
pub const TYPE_FILTER_ALL: &str = "all";

/// 一覧の絞り込み・ソート条件
#[derive(Debug, Clone, Default)]
pub struct SelectCriteria {
    /// 検索クエリ（名前・組織名の部分一致、大文字小文字無視）
    pub query: Option<String>,
    /// 種別フィルタ（None または "all" で全件）
    pub type_filter: Option<String>,
    /// 組織スラッグ（組織詳細コンテキストのみ）
    pub org: Option<String>,
    /// ソートキー
    pub sort: SortField,
    /// 未署名プラグインを含めるか
    pub show_unsigned: bool,
}

/// ソートキーレジストリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortField {
    /// 名前昇順
    #[default]
    Name,
    /// 更新日時降順
    Updated,
    /// 公開日時降順
    Published,
    /// ダウンロード数降順
    Downloads,
    /// 人気度降順
    Popularity,
}

impl SortField {
    pub fn all() -> &'static [SortField] {
        &[
            SortField::Name,
            SortField::Updated,
            SortField::Published,
            SortField::Downloads,
            SortField::Popularity,
        ]
    }

    /// キー名を返す
    pub fn key(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Updated => "updated",
            SortField::Published => "published",
            SortField::Downloads => "downloads",
            SortField::Popularity => "popularity",
        }
    }

    /// キー名から引く（未知・未指定はデフォルトの name）
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("updated") => SortField::Updated,
            Some("published") => SortField::Published,
            Some("downloads") => SortField::Downloads,
            Some("popularity") => SortField::Popularity,
            _ => SortField::Name,
        }
    }

    /// 次のキー（パネルでの巡回用）
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// 比較関数
    ///
    /// 日時はパース失敗時に末尾へ送る。同値は Ordering::Equal を返し、
    /// 安定ソート側で元の相対順が保たれる。
    pub fn compare(&self, a: &Plugin, b: &Plugin) -> Ordering {
        match self {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Updated => compare_times_desc(a.updated_time(), b.updated_time()),
            SortField::Published => compare_times_desc(a.created_time(), b.created_time()),
            SortField::Downloads => b.downloads.cmp(&a.downloads),
            SortField::Popularity => b
                .popularity
                .partial_cmp(&a.popularity)
                .unwrap_or(Ordering::Equal),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// 日時降順比較（None は末尾）
fn compare_times_desc<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(at), Some(bt)) => bt.cmp(&at),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
#[path = "criteria_test.rs"]
mod tests;
