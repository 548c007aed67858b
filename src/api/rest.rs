//! REST クライアント実装

use super::{BackendClient, InstallRequest, UninstallRequest, VersionEntry};
use crate::catalog::{LocalPlugin, Plugin};
use crate::config::{HttpConfig, Settings};
use crate::error::{MarketError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

/// {items: [...]} エンベロープ
#[derive(Debug, serde::Deserialize)]
struct ItemsEnvelope<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// バックエンド REST クライアント
pub struct RestClient {
    http: Client,
    base: String,
}

impl RestClient {
    /// 新しいクライアントを作成
    pub fn new(config: &HttpConfig, base: impl Into<String>) -> Self {
        Self {
            http: config.build_client(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    /// 設定からクライアントを作成
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&HttpConfig::default(), settings.api_base.clone())
    }

    /// プラグイン一覧URL
    fn plugins_url(&self) -> String {
        format!("{}/plugins", self.base)
    }

    /// 単一プラグインURL
    fn plugin_url(&self, slug: &str) -> String {
        format!("{}/plugins/{}", self.base, slug)
    }

    /// バージョン履歴URL
    fn versions_url(&self, slug: &str) -> String {
        format!("{}/plugins/{}/versions", self.base, slug)
    }

    /// インストール済み一覧URL
    fn installed_url(&self) -> String {
        format!("{}/installed", self.base)
    }

    /// インストールURL
    fn install_url(&self) -> String {
        format!("{}/install", self.base)
    }

    /// アンインストールURL
    fn uninstall_url(&self) -> String {
        format!("{}/uninstall", self.base)
    }

    /// GET してJSONをパース
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: Option<(&str, &str)>,
    ) -> Result<T> {
        let mut req = self.http.get(&url);
        if let Some((name, value)) = query {
            req = req.query(&[(name, value)]);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MarketError::Api { status, message });
        }

        Ok(response.json::<T>().await?)
    }

    /// POST してステータスのみ確認（本文は捨てる）
    async fn post_json<B: Serialize>(&self, url: String, body: &B) -> Result<()> {
        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MarketError::Api { status, message });
        }

        Ok(())
    }
}

impl BackendClient for RestClient {
    fn list_plugins<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Plugin>>> + Send + 'a>> {
        Box::pin(async move {
            let envelope: ItemsEnvelope<Plugin> = self.get_json(self.plugins_url(), None).await?;
            Ok(envelope.items)
        })
    }

    fn get_plugin<'a>(
        &'a self,
        slug: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Plugin>> + Send + 'a>> {
        Box::pin(async move {
            match self.get_json::<Plugin>(self.plugin_url(slug), None).await {
                Err(MarketError::Api { status: 404, .. }) => {
                    Err(MarketError::PluginNotFound(slug.to_string()))
                }
                other => other,
            }
        })
    }

    fn get_versions<'a>(
        &'a self,
        slug: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<VersionEntry>>> + Send + 'a>> {
        Box::pin(async move {
            let envelope: ItemsEnvelope<VersionEntry> =
                self.get_json(self.versions_url(slug), None).await?;
            Ok(envelope.items)
        })
    }

    fn list_installed<'a>(
        &'a self,
        plugin_dir: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<LocalPlugin>>> + Send + 'a>> {
        Box::pin(async move {
            self.get_json(self.installed_url(), Some(("pluginDir", plugin_dir)))
                .await
        })
    }

    fn install<'a>(
        &'a self,
        request: &'a InstallRequest,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move { self.post_json(self.install_url(), request).await })
    }

    fn uninstall<'a>(
        &'a self,
        request: &'a UninstallRequest,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        Box::pin(async move { self.post_json(self.uninstall_url(), request).await })
    }
}

#[cfg(test)]
#[path = "rest_test.rs"]
mod tests;
