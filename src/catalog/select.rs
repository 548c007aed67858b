//! 一覧の絞り込み・ソートパイプライン
//!
//! 純粋関数。入力への参照のみを返し、生成・複製はしない。
//! フィルタは論理積で、順序は短絡コストのみに影響する（結果は不変）。

use super::criteria::{SelectCriteria, TYPE_FILTER_ALL};
use super::plugin::{Plugin, PluginStatus};

/// 条件に合致するプラグインを絞り込み、ソートして返す
pub fn select<'a>(plugins: &'a [Plugin], criteria: &SelectCriteria) -> Vec<&'a Plugin> {
    let query = criteria
        .query
        .as_deref()
        .map(str::to_lowercase)
        .filter(|q| !q.is_empty());

    let mut selected: Vec<&Plugin> = plugins
        .iter()
        // active 以外（enterprise / internal 等）は一覧から除外。詳細ビュー側で扱う
        .filter(|p| p.status == PluginStatus::Active)
        .filter(|p| p.is_signed() || criteria.show_unsigned)
        .filter(|p| matches_query(p, query.as_deref()))
        .filter(|p| matches_type(p, criteria.type_filter.as_deref()))
        .filter(|p| matches_org(p, criteria.org.as_deref()))
        .collect();

    // sort_by は安定ソート。同値は元の相対順を保つ
    selected.sort_by(|a, b| criteria.sort.compare(a, b));
    selected
}

/// 名前・組織名への部分一致（空クエリは全件一致）
fn matches_query(plugin: &Plugin, query: Option<&str>) -> bool {
    match query {
        None => true,
        Some(q) => {
            plugin.name.to_lowercase().contains(q) || plugin.org_name.to_lowercase().contains(q)
        }
    }
}

/// 種別一致（未指定と "all" センチネルは全件）
fn matches_type(plugin: &Plugin, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(f) => f == TYPE_FILTER_ALL || plugin.type_code == f,
    }
}

/// 組織一致（組織詳細コンテキスト以外では未指定）
fn matches_org(plugin: &Plugin, org: Option<&str>) -> bool {
    match org {
        None => true,
        Some(o) => plugin.org_slug == o,
    }
}

#[cfg(test)]
#[path = "select_test.rs"]
mod tests;

#[cfg(test)]
#[path = "select_proptests.rs"]
mod proptests;
