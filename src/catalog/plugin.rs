//! プラグイン記述子
//!
//! バックエンドが返すリモート記述子（Plugin）とインストール済み記述子
//! （LocalPlugin）。リモート記述子は取得時点のスナップショットであり、
//! リフレッシュ時に丸ごと置き換えられる。

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// プラグインのライフサイクルステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginStatus {
    Active,
    Enterprise,
    #[default]
    #[serde(other)]
    Unknown,
}

/// アーキテクチャ別パッケージ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginPackage {
    #[serde(default)]
    pub package_name: String,
    pub download_url: String,
}

/// relation → URL のリンク
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginLink {
    pub rel: String,
    pub href: String,
}

/// 名前つきリンク（plugin.json 由来）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLink {
    pub name: String,
    pub url: String,
}

/// plugin.json の依存情報
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginDependencies {
    #[serde(default)]
    pub grafana_dependency: Option<String>,
    #[serde(default)]
    pub grafana_version: Option<String>,
}

/// plugin.json の info セクション
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginInfo {
    #[serde(default)]
    pub links: Vec<NamedLink>,
}

/// plugin.json 抜粋
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginJson {
    #[serde(default)]
    pub dependencies: PluginDependencies,
    #[serde(default)]
    pub info: PluginInfo,
}

/// リモートプラグイン記述子
///
/// slug が一意キー。packages は BTreeMap で保持し、アーキテクチャ選択肢の
/// 表示順を決定的にする。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub org_name: String,
    #[serde(default)]
    pub org_slug: String,
    #[serde(default)]
    pub status: PluginStatus,
    #[serde(default)]
    pub internal: bool,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub version_signature_type: Option<String>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub featured: u32,
    #[serde(default)]
    pub type_code: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub readme: String,
    #[serde(default)]
    pub packages: BTreeMap<String, PluginPackage>,
    #[serde(default)]
    pub links: Vec<PluginLink>,
    #[serde(default)]
    pub json: PluginJson,
}

impl Plugin {
    /// 署名済みかどうか（versionSignatureType が空/未設定なら未署名）
    pub fn is_signed(&self) -> bool {
        self.version_signature_type
            .as_deref()
            .is_some_and(|s| !s.is_empty())
    }

    /// rel == "download" のリンクを取得
    pub fn download_link(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.rel == "download")
            .map(|l| l.href.as_str())
    }

    /// 要求されるホストバージョン範囲
    pub fn dependency_range(&self) -> Option<&str> {
        self.json.dependencies.grafana_dependency.as_deref()
    }

    /// 更新日時（パース済み）
    pub fn updated_time(&self) -> Option<DateTime<Utc>> {
        parse_time(&self.updated_at)
    }

    /// 公開日時（パース済み）
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        parse_time(&self.created_at)
    }
}

/// インストール済みプラグイン記述子
///
/// id はプラグインの slug。一覧に存在しないことが「未インストール」を表す。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalPlugin {
    pub id: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub dev: bool,
    #[serde(default)]
    pub links: Vec<PluginLink>,
}

/// タイムスタンプ文字列をパース
///
/// RFC3339 → naive datetime → 日付のみ、の順で試す。
pub fn parse_time(input: &str) -> Option<DateTime<Utc>> {
    if input.is_empty() {
        return None;
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(input) {
        return Some(t.with_timezone(&Utc));
    }

    if let Ok(t) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(t.and_utc());
    }

    if let Ok(t) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(t.and_utc());
    }

    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|t| t.and_utc());
    }

    None
}

#[cfg(test)]
#[path = "plugin_test.rs"]
mod tests;
