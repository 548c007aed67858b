//! インストールアクションの決定手続き
//!
//! (リモート記述子, ローカル記述子 or なし) から提示すべきアクションを
//! 決める純粋関数。最初に一致した規則が勝ち、規則同士は排他。

use super::action::{Action, ArchOption, UnsupportedReason};
use super::version::{is_newer, satisfies_dependency};
use crate::catalog::{LocalPlugin, Plugin, PluginStatus};

/// アクションを解決する
///
/// remote と local は同一時点で取得したペアであること。
/// selection はアーキテクチャ選択UIの選択値（未選択なら None）。
pub fn resolve(
    remote: &Plugin,
    local: Option<&LocalPlugin>,
    host_version: &str,
    selection: Option<&str>,
) -> Action {
    // 1. Enterprise プラグインは対象外
    if remote.status == PluginStatus::Enterprise {
        return Action::Unsupported(UnsupportedReason::Enterprise);
    }

    // 2. 同梱プラグインは操作不要
    if remote.internal {
        return Action::Unsupported(UnsupportedReason::AlreadyIncluded);
    }

    if let Some(local) = local {
        // 3. 開発ビルドは削除不可
        if local.dev {
            return Action::Unsupported(UnsupportedReason::DevelopmentBuild);
        }

        // 4. インストール済み: アンインストール常時可、
        //    リモートが厳密に新しい場合のみ更新も提示
        let update_to = if is_newer(&remote.version, &local.version) {
            Some(remote.version.clone())
        } else {
            None
        };
        return Action::UpdateAndUninstall { update_to };
    }

    // 5. ホストバージョンが要求範囲を満たさない
    if !satisfies_dependency(remote.dependency_range(), host_version) {
        return Action::Unsupported(UnsupportedReason::VersionMismatch);
    }

    // 6. 複数アーキテクチャ: 選択されるまでインストールは出さない
    if remote.packages.len() > 1 {
        if let Some(url) = selection.and_then(|arch| package_url(remote, arch)) {
            return Action::Install { url };
        }

        let options = remote
            .packages
            .iter()
            .map(|(arch, package)| ArchOption {
                arch: arch.clone(),
                url: package.download_url.clone(),
            })
            .collect();
        return Action::ArchitectureChoice { options };
    }

    // 7. 単一のダウンロード先（唯一のパッケージ、または rel=download リンク）
    if let Some(url) = download_url(remote, None) {
        return Action::Install { url };
    }

    // 8. 操作なし
    Action::None
}

/// リモート記述子からインストールURLを導出する
///
/// 選択アーキテクチャのパッケージ → 唯一のパッケージ → rel=download リンク
/// の順。更新（アンインストール→最新インストール）のURL決定にも使う。
pub fn download_url(remote: &Plugin, selection: Option<&str>) -> Option<String> {
    if let Some(url) = selection.and_then(|arch| package_url(remote, arch)) {
        return Some(url);
    }

    if remote.packages.len() == 1 {
        return remote
            .packages
            .values()
            .next()
            .map(|p| p.download_url.clone());
    }

    if remote.packages.is_empty() {
        return remote.download_link().map(str::to_string);
    }

    None
}

fn package_url(remote: &Plugin, arch: &str) -> Option<String> {
    remote.packages.get(arch).map(|p| p.download_url.clone())
}

#[cfg(test)]
#[path = "resolve_test.rs"]
mod tests;
