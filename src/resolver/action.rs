//! 解決済みアクション
//!
//! 「どの操作ボタンを出すか」を表すタグ付きバリアント。
//! レゾルバは純粋関数としてこのデータを返し、描画層から分離される。

/// 操作不可の理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    /// Enterprise プラグインは対象外
    Enterprise,
    /// ホストに同梱済み
    AlreadyIncluded,
    /// 開発ビルドとしてインストールされている
    DevelopmentBuild,
    /// ホストバージョンが要求範囲を満たさない
    VersionMismatch,
}

impl UnsupportedReason {
    /// ユーザー向けメッセージ
    pub fn message(&self) -> &'static str {
        match self {
            UnsupportedReason::Enterprise => "Enterprise plugins are not supported",
            UnsupportedReason::AlreadyIncluded => "Already included with the host",
            UnsupportedReason::DevelopmentBuild => {
                "Installed as a development build and cannot be uninstalled"
            }
            UnsupportedReason::VersionMismatch => {
                "Host version does not satisfy the plugin's required range"
            }
        }
    }
}

/// アーキテクチャ選択肢
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchOption {
    /// アーキテクチャラベル（例: "linux_amd64"）
    pub arch: String,
    /// 選択時にインストールへ渡すURL
    pub url: String,
}

/// 解決されたアクション
///
/// 排他的。詳細ビューは返ってきたバリアントをそのまま描画する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 利用可能なダウンロード先がない
    None,
    /// 操作不可（ボタンなし、理由のみ表示）
    Unsupported(UnsupportedReason),
    /// インストール可能（URL確定）
    Install { url: String },
    /// インストール済み。アンインストール常時可、
    /// update_to は新しいリモートバージョンがある場合のみ
    UpdateAndUninstall { update_to: Option<String> },
    /// 複数アーキテクチャから選択が必要。
    /// 選択されるまでインストールボタンは出さない
    ArchitectureChoice { options: Vec<ArchOption> },
}

impl Action {
    /// アクションの種類を文字列で取得
    pub fn kind(&self) -> &'static str {
        match self {
            Action::None => "none",
            Action::Unsupported(_) => "unsupported",
            Action::Install { .. } => "install",
            Action::UpdateAndUninstall { .. } => "update_and_uninstall",
            Action::ArchitectureChoice { .. } => "architecture_choice",
        }
    }

    /// インストールボタンを出すか
    pub fn offers_install(&self) -> bool {
        matches!(self, Action::Install { .. })
    }

    /// 更新ボタンを出すか
    pub fn offers_update(&self) -> bool {
        matches!(
            self,
            Action::UpdateAndUninstall {
                update_to: Some(_)
            }
        )
    }

    /// アンインストールボタンを出すか
    pub fn offers_uninstall(&self) -> bool {
        matches!(self, Action::UpdateAndUninstall { .. })
    }

    /// 確定済みインストールURLを取得
    pub fn install_url(&self) -> Option<&str> {
        match self {
            Action::Install { url } => Some(url),
            _ => None,
        }
    }

    /// 操作不可理由を取得
    pub fn unsupported_reason(&self) -> Option<UnsupportedReason> {
        match self {
            Action::Unsupported(reason) => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "action_test.rs"]
mod tests;
