//! バックエンドAPIクライアント
//!
//! レジストリ参照・パッケージ解決・ファイル配置はすべてバックエンドが
//! 行う。ここはその REST 面の薄いクライアント。

mod rest;

pub use rest::RestClient;

use crate::catalog::{LocalPlugin, Plugin};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// バージョン履歴エントリ
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    pub version: String,
    #[serde(default)]
    pub created_at: String,
}

/// インストール要求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallRequest {
    pub url: String,
    pub plugin_dir: String,
}

/// アンインストール要求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UninstallRequest {
    pub slug: String,
    pub plugin_dir: String,
}

/// バックエンドクライアント trait
pub trait BackendClient: Send + Sync {
    /// プラグイン一覧を取得（絞り込みはクライアント側で行う）
    fn list_plugins<'a>(&'a self)
        -> Pin<Box<dyn Future<Output = Result<Vec<Plugin>>> + Send + 'a>>;

    /// 単一プラグインを取得
    fn get_plugin<'a>(
        &'a self,
        slug: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Plugin>> + Send + 'a>>;

    /// バージョン履歴を取得
    fn get_versions<'a>(
        &'a self,
        slug: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<VersionEntry>>> + Send + 'a>>;

    /// インストール済みプラグイン一覧を取得
    fn list_installed<'a>(
        &'a self,
        plugin_dir: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<LocalPlugin>>> + Send + 'a>>;

    /// インストールを指示（ダウンロードと配置はバックエンドが行う）
    fn install<'a>(
        &'a self,
        request: &'a InstallRequest,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

    /// アンインストールを指示
    fn uninstall<'a>(
        &'a self,
        request: &'a UninstallRequest,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}
