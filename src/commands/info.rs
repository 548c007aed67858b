//! pmp info コマンド
//!
//! プラグインの詳細・解決済みアクション・バージョン履歴を表示する。

use crate::api::{BackendClient, RestClient};
use crate::config::Settings;
use crate::output::{info_prefix, time_ago};
use crate::resolver::{Action, DetailSession};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    /// プラグインのスラッグ
    pub slug: String,

    /// 表示するバージョン履歴の件数
    #[arg(long, default_value_t = 10)]
    pub versions: usize,
}

pub async fn run(args: Args) -> Result<(), String> {
    let settings = Settings::load().map_err(|e| e.to_string())?;
    let client = RestClient::from_settings(&settings);

    // (リモート, ローカル) を一括取得してから解決する
    let mut session = DetailSession::new(args.slug.clone(), settings.plugin_dir.clone());
    session.refresh(&client).await.map_err(|e| e.to_string())?;

    let versions = client
        .get_versions(&args.slug)
        .await
        .map_err(|e| e.to_string())?;

    let snapshot = session
        .snapshot()
        .ok_or_else(|| format!("Plugin not found: {}", args.slug))?;
    let remote = &snapshot.remote;

    println!("{}", remote.name.bold());
    println!("{} {}", info_prefix(), remote.org_name);
    if !remote.description.is_empty() {
        println!("{}", remote.description);
    }
    println!();
    println!("Version:   {}", remote.version);
    println!("Type:      {}", remote.type_code);
    println!("Downloads: {}", remote.downloads);
    println!("Updated:   {}", time_ago(&remote.updated_at));
    if let Some(local) = &snapshot.local {
        let dev = if local.dev { " (dev build)" } else { "" };
        println!("Installed: {}{}", local.version, dev);
    }
    println!();

    let action = session
        .resolve(&settings.host_version, None)
        .unwrap_or(Action::None);
    print_action(&action);

    if args.versions > 0 && !versions.is_empty() {
        println!("\nVersion history");
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Version", "Released"]);

        for entry in versions.iter().take(args.versions) {
            table.add_row(vec![entry.version.as_str(), &time_ago(&entry.created_at)]);
        }

        println!("{table}");
    }

    Ok(())
}

/// 解決されたアクションを1行ずつ表示
fn print_action(action: &Action) {
    match action {
        Action::None => println!("No install action available"),
        Action::Unsupported(reason) => println!("Not installable: {}", reason.message()),
        Action::Install { url } => println!("Available: pmp install ({})", url),
        Action::UpdateAndUninstall { update_to } => {
            if let Some(version) = update_to {
                println!("Update available: pmp update (to {})", version);
            }
            println!("Installed: pmp uninstall to remove");
        }
        Action::ArchitectureChoice { options } => {
            println!("Choose an architecture with --arch:");
            for option in options {
                println!("  {}", option.arch);
            }
        }
    }
}
