//! pmp update コマンド
//!
//! インストール済みプラグインを最新バージョンに更新する。
//! 更新はアンインストール → 最新のインストールの2段階で行われる。

use crate::api::RestClient;
use crate::config::Settings;
use crate::output::{busy_spinner, ok_prefix};
use crate::resolver::{download_url, Action, DetailSession};
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// プラグインのスラッグ
    pub slug: String,

    /// アーキテクチャ（複数パッケージがある場合に指定）
    #[arg(long)]
    pub arch: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let settings = Settings::load().map_err(|e| e.to_string())?;
    let client = RestClient::from_settings(&settings);

    let mut session = DetailSession::new(args.slug.clone(), settings.plugin_dir.clone());
    session.refresh(&client).await.map_err(|e| e.to_string())?;

    let action = session
        .resolve(&settings.host_version, None)
        .ok_or_else(|| format!("Plugin not found: {}", args.slug))?;

    let target_version = match action {
        Action::Unsupported(reason) => return Err(reason.message().to_string()),
        Action::UpdateAndUninstall {
            update_to: Some(version),
        } => version,
        Action::UpdateAndUninstall { update_to: None } => {
            println!("{}: Already up to date", args.slug);
            return Ok(());
        }
        _ => {
            return Err(format!(
                "'{}' is not installed. Run 'pmp install {}' instead.",
                args.slug, args.slug
            ))
        }
    };

    // 最新バージョンのダウンロード先を決定
    let url = {
        let snapshot = session
            .snapshot()
            .ok_or_else(|| format!("Plugin not found: {}", args.slug))?;
        download_url(&snapshot.remote, args.arch.as_deref())
            .ok_or_else(|| "No download available for the latest version".to_string())?
    };

    let spinner = busy_spinner(&format!("Updating {}...", args.slug));
    let _ = session.update(&client, &url).await;
    spinner.finish_and_clear();

    // リフレッシュ済みの状態から結果を報告
    match session.snapshot().and_then(|s| s.local.as_ref()) {
        Some(local) if local.version == target_version => {
            println!(
                "{} Plugin '{}' updated to {}.",
                ok_prefix(),
                args.slug,
                local.version
            );
            Ok(())
        }
        Some(local) => Err(format!(
            "Update did not take effect; '{}' is still at {}.",
            args.slug, local.version
        )),
        // アンインストール後のインストール失敗: プラグインは未インストールのまま
        None => Err(format!(
            "Update failed partway; '{}' is now uninstalled. Run 'pmp install {}' to reinstall.",
            args.slug, args.slug
        )),
    }
}
