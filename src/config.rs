//! アプリケーション設定とHTTP設定
//!
//! 設定ファイル（TOML）→ 環境変数の順で上書きする。

use crate::env::EnvVar;
use crate::error::Result;
use reqwest::Client;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// デフォルトのバックエンドベースURL
const DEFAULT_API_BASE: &str = "http://localhost:3000/api";

/// デフォルトのホストバージョン（依存バージョン判定に使用）
const DEFAULT_HOST_VERSION: &str = "7.0.0";

/// 設定ファイルのスキーマ（全フィールド任意）
#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    api_base: Option<String>,
    #[serde(default)]
    plugin_dir: Option<String>,
    #[serde(default)]
    show_unsigned: Option<bool>,
    #[serde(default)]
    host_version: Option<String>,
}

/// アプリケーション設定
#[derive(Debug, Clone)]
pub struct Settings {
    /// バックエンドのベースURL
    pub api_base: String,
    /// プラグインのインストール先ディレクトリ（バックエンドに渡す）
    pub plugin_dir: String,
    /// 未署名プラグインを一覧に含めるか
    pub show_unsigned: bool,
    /// 稼働ホストのバージョン（grafanaDependency 判定に使用）
    pub host_version: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            plugin_dir: default_plugin_dir(),
            show_unsigned: false,
            host_version: DEFAULT_HOST_VERSION.to_string(),
        }
    }
}

/// デフォルトのプラグインディレクトリ: ~/.pmp/plugins
fn default_plugin_dir() -> String {
    match EnvVar::get("HOME") {
        Some(home) => PathBuf::from(home)
            .join(".pmp")
            .join("plugins")
            .to_string_lossy()
            .to_string(),
        None => "./plugins".to_string(),
    }
}

/// 設定ファイルのパス: $PMP_CONFIG または ~/.pmp/config.toml
fn config_path() -> Option<PathBuf> {
    if let Some(path) = EnvVar::get("PMP_CONFIG") {
        return Some(PathBuf::from(path));
    }
    EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".pmp").join("config.toml"))
}

impl Settings {
    /// 設定を読み込む
    ///
    /// 優先順位: 環境変数 > 設定ファイル > デフォルト
    pub fn load() -> Result<Self> {
        let file = match config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str::<SettingsFile>(&content)?
            }
            _ => SettingsFile::default(),
        };

        Ok(Self::from_sources(&file))
    }

    /// ファイル値と環境変数をマージ
    fn from_sources(file: &SettingsFile) -> Self {
        let defaults = Settings::default();

        Settings {
            api_base: EnvVar::get("PMP_API_BASE")
                .or_else(|| file.api_base.clone())
                .unwrap_or(defaults.api_base),
            plugin_dir: EnvVar::get("PMP_PLUGIN_DIR")
                .or_else(|| file.plugin_dir.clone())
                .unwrap_or(defaults.plugin_dir),
            show_unsigned: EnvVar::get_bool("PMP_SHOW_UNSIGNED")
                .or(file.show_unsigned)
                .unwrap_or(defaults.show_unsigned),
            host_version: EnvVar::get("PMP_HOST_VERSION")
                .or_else(|| file.host_version.clone())
                .unwrap_or(defaults.host_version),
        }
    }
}

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "pmp-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
