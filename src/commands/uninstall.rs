//! pmp uninstall コマンド

use crate::api::RestClient;
use crate::config::Settings;
use crate::output::{busy_spinner, info_prefix, ok_prefix};
use crate::resolver::{Action, DetailSession};
use clap::Parser;
use owo_colors::OwoColorize;
use std::io::{self, Write};

#[derive(Debug, Parser)]
pub struct Args {
    /// プラグインのスラッグ
    pub slug: String,

    /// 確認プロンプトをスキップ
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let settings = Settings::load().map_err(|e| e.to_string())?;
    let client = RestClient::from_settings(&settings);

    // 1. 事前チェック: インストール状態を確認
    let mut session = DetailSession::new(args.slug.clone(), settings.plugin_dir.clone());
    session.refresh(&client).await.map_err(|e| e.to_string())?;

    let action = session
        .resolve(&settings.host_version, None)
        .ok_or_else(|| format!("Plugin not found: {}", args.slug))?;

    match &action {
        Action::UpdateAndUninstall { .. } => {}
        Action::Unsupported(reason) => return Err(reason.message().to_string()),
        _ => return Err(format!("'{}' is not installed.", args.slug)),
    }

    // 2. 削除対象の情報表示
    if let Some(snapshot) = session.snapshot() {
        println!(
            "{} Plugin: {} (version: {})",
            info_prefix(),
            snapshot.remote.name.bold(),
            snapshot
                .local
                .as_ref()
                .map(|l| l.version.as_str())
                .unwrap_or("unknown")
        );
    }

    // 3. 確認プロンプト（--force でスキップ）
    if !args.force && !confirm_uninstall(&args.slug)? {
        println!("Uninstall cancelled.");
        return Ok(());
    }

    // 4. 削除実行
    let spinner = busy_spinner(&format!("Uninstalling {}...", args.slug));
    let _ = session.uninstall(&client).await;
    spinner.finish_and_clear();

    // 5. リフレッシュ済みの状態から結果を報告
    match session.snapshot().and_then(|s| s.local.as_ref()) {
        None => {
            println!(
                "{} Plugin '{}' uninstalled successfully.",
                ok_prefix(),
                args.slug
            );
            Ok(())
        }
        Some(_) => Err(format!(
            "Uninstall did not take effect for '{}'; check the marketplace backend.",
            args.slug
        )),
    }
}

/// ユーザーに削除確認を求める
fn confirm_uninstall(slug: &str) -> Result<bool, String> {
    print!("Are you sure you want to uninstall '{}'? [y/N]: ", slug);
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().eq_ignore_ascii_case("y") || input.trim().eq_ignore_ascii_case("yes"))
}
