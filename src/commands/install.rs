//! pmp install コマンド
//!
//! レゾルバが Install を返した場合のみバックエンドにインストールを
//! 指示する。複数アーキテクチャのプラグインは --arch の選択を要求する。

use crate::api::RestClient;
use crate::config::Settings;
use crate::output::{busy_spinner, ok_prefix, warn_prefix};
use crate::resolver::{Action, DetailSession};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// プラグインのスラッグ
    pub slug: String,

    /// アーキテクチャ（複数パッケージがある場合に指定、例: "linux_amd64"）
    #[arg(long)]
    pub arch: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let settings = Settings::load().map_err(|e| e.to_string())?;
    let client = RestClient::from_settings(&settings);

    // 1. (リモート, ローカル) のスナップショットを取得
    let mut session = DetailSession::new(args.slug.clone(), settings.plugin_dir.clone());
    session.refresh(&client).await.map_err(|e| e.to_string())?;

    // 2. アクションを解決
    let action = session
        .resolve(&settings.host_version, args.arch.as_deref())
        .ok_or_else(|| format!("Plugin not found: {}", args.slug))?;

    // 3. アクションに応じて実行
    let url = match action {
        Action::Unsupported(reason) => return Err(reason.message().to_string()),
        Action::UpdateAndUninstall { update_to } => {
            if let Some(version) = update_to {
                println!(
                    "{} '{}' is already installed. Run 'pmp update {}' to update to {}.",
                    warn_prefix(),
                    args.slug,
                    args.slug,
                    version
                );
            } else {
                println!("{} '{}' is already installed.", warn_prefix(), args.slug);
            }
            return Ok(());
        }
        Action::ArchitectureChoice { options } => {
            println!("Multiple architectures available. Choose one with --arch:");
            for option in &options {
                println!("  pmp install {} --arch {}", args.slug, option.arch);
            }
            return Ok(());
        }
        Action::None => return Err("No download available for this plugin".to_string()),
        Action::Install { url } => url,
    };

    // 4. インストール実行（Busy中はスピナー表示）
    let spinner = busy_spinner(&format!("Installing {}...", args.slug));
    let _ = session.install(&client, &url).await;
    spinner.finish_and_clear();

    // 5. リフレッシュ済みの状態から結果を報告
    match session.snapshot().and_then(|s| s.local.as_ref()) {
        Some(local) => {
            println!(
                "{} Plugin '{}' installed (version {}).",
                ok_prefix(),
                args.slug,
                local.version
            );
            Ok(())
        }
        None => Err(format!(
            "Install did not take effect for '{}'; check the marketplace backend.",
            args.slug
        )),
    }
}
