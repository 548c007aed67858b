//! 詳細ビューの操作セッション
//!
//! プラグイン詳細ごとに Idle → Busy → Idle の状態機械を持ち、
//! install / update / uninstall を同じ非同期パターンで包む:
//! Busy 遷移 → バックエンド呼び出し → Busy 解除 → 無条件リフレッシュ。
//!
//! Busy 中の再実行はバックエンドを呼ばずにスキップする（UIレベルの
//! ベストエフォートなロックで、サーバー側では強制されない）。
//! 失敗はリトライせず、リフレッシュ後の状態に委ねる。

use crate::api::{BackendClient, InstallRequest, UninstallRequest};
use crate::catalog::{LocalPlugin, Plugin};
use crate::error::Result;
use super::action::Action;
use super::resolve::resolve;

/// 実行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Busy,
}

impl Phase {
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Busy)
    }
}

/// 同一時点で取得した (リモート, ローカル or なし) のペア
///
/// レゾルバへの入力は必ずこのペア単位で渡し、古いリモートと新しい
/// ローカルの混在を防ぐ。
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub remote: Plugin,
    pub local: Option<LocalPlugin>,
}

/// 操作結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOutcome {
    /// バックエンド呼び出しが成功した
    Completed,
    /// バックエンド呼び出しが失敗した（状態はリフレッシュ済み）
    Failed,
    /// Busy 中のためスキップした（バックエンドは呼ばれていない）
    SkippedBusy,
}

impl OperationOutcome {
    pub fn was_performed(&self) -> bool {
        !matches!(self, OperationOutcome::SkippedBusy)
    }
}

/// プラグイン詳細セッション
///
/// 別プラグインのセッション同士は状態を共有せず、独立に操作できる。
pub struct DetailSession {
    slug: String,
    plugin_dir: String,
    phase: Phase,
    snapshot: Option<Snapshot>,
}

impl DetailSession {
    /// 新しいセッションを作成（スナップショット未取得）
    pub fn new(slug: impl Into<String>, plugin_dir: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            plugin_dir: plugin_dir.into(),
            phase: Phase::Idle,
            snapshot: None,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// (リモート, ローカル) を一括で取得し直す
    pub async fn refresh(&mut self, client: &dyn BackendClient) -> Result<()> {
        let remote = client.get_plugin(&self.slug).await?;
        let installed = client.list_installed(&self.plugin_dir).await?;
        let local = installed.into_iter().find(|p| p.id == self.slug);

        self.snapshot = Some(Snapshot { remote, local });
        Ok(())
    }

    /// 現在のスナップショットからアクションを解決
    pub fn resolve(&self, host_version: &str, selection: Option<&str>) -> Option<Action> {
        self.snapshot
            .as_ref()
            .map(|s| resolve(&s.remote, s.local.as_ref(), host_version, selection))
    }

    /// Idle なら Busy に遷移して true を返す
    fn try_begin(&mut self) -> bool {
        if self.phase.is_busy() {
            return false;
        }
        self.phase = Phase::Busy;
        true
    }

    /// Busy 解除と無条件リフレッシュ
    ///
    /// 成功・失敗のどちらの経路でも必ず通る。リフレッシュ自体の失敗も
    /// 伝播させない（次回の参照で再取得される）。
    async fn settle(&mut self, client: &dyn BackendClient) {
        self.phase = Phase::Idle;
        let _ = self.refresh(client).await;
    }

    /// インストールを実行
    pub async fn install(&mut self, client: &dyn BackendClient, url: &str) -> OperationOutcome {
        if !self.try_begin() {
            return OperationOutcome::SkippedBusy;
        }

        let request = InstallRequest {
            url: url.to_string(),
            plugin_dir: self.plugin_dir.clone(),
        };
        let result = client.install(&request).await;

        self.settle(client).await;
        outcome(result)
    }

    /// アンインストールを実行
    pub async fn uninstall(&mut self, client: &dyn BackendClient) -> OperationOutcome {
        if !self.try_begin() {
            return OperationOutcome::SkippedBusy;
        }

        let request = UninstallRequest {
            slug: self.slug.clone(),
            plugin_dir: self.plugin_dir.clone(),
        };
        let result = client.uninstall(&request).await;

        self.settle(client).await;
        outcome(result)
    }

    /// 更新を実行（アンインストール → 最新のインストール）
    ///
    /// ひとつのユーザー操作だが、バックエンドにアトミックな更新
    /// プリミティブはない。アンインストール成功後にインストールが
    /// 失敗するとプラグインは未インストールのまま残る。
    pub async fn update(&mut self, client: &dyn BackendClient, url: &str) -> OperationOutcome {
        if !self.try_begin() {
            return OperationOutcome::SkippedBusy;
        }

        let uninstall_request = UninstallRequest {
            slug: self.slug.clone(),
            plugin_dir: self.plugin_dir.clone(),
        };
        let result = match client.uninstall(&uninstall_request).await {
            Ok(()) => {
                let install_request = InstallRequest {
                    url: url.to_string(),
                    plugin_dir: self.plugin_dir.clone(),
                };
                client.install(&install_request).await
            }
            Err(e) => Err(e),
        };

        self.settle(client).await;
        outcome(result)
    }
}

fn outcome(result: Result<()>) -> OperationOutcome {
    match result {
        Ok(()) => OperationOutcome::Completed,
        Err(_) => OperationOutcome::Failed,
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
