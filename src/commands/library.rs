//! pmp library コマンド
//!
//! インストール済みプラグインをリモートメタデータと結合して表示する。

use crate::api::{BackendClient, RestClient};
use crate::catalog::{LocalPlugin, Plugin};
use crate::config::Settings;
use crate::resolver::is_newer;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    /// JSON形式で出力
    #[arg(long)]
    pub json: bool,
}

/// インストール済みエントリとリモート情報の結合結果
#[derive(Debug, Clone, Serialize)]
struct LibraryEntry {
    slug: String,
    name: String,
    org_name: String,
    installed_version: String,
    latest_version: Option<String>,
    dev: bool,
    has_update: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let settings = Settings::load().map_err(|e| e.to_string())?;
    let client = RestClient::from_settings(&settings);

    // リモート一覧とインストール済み一覧を取得して結合
    let plugins = client.list_plugins().await.map_err(|e| e.to_string())?;
    let installed = client
        .list_installed(&settings.plugin_dir)
        .await
        .map_err(|e| e.to_string())?;

    let entries = join_entries(&plugins, &installed, settings.show_unsigned);

    if args.json {
        serde_json::to_string_pretty(&entries)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize library: {}", e))?;
        return Ok(());
    }

    print_table(&entries);
    Ok(())
}

/// リモート一覧のうちインストール済みのものを結合
///
/// 未署名プラグインは show_unsigned が立っていない限り表示しない。
fn join_entries(
    plugins: &[Plugin],
    installed: &[LocalPlugin],
    show_unsigned: bool,
) -> Vec<LibraryEntry> {
    plugins
        .iter()
        .filter(|p| p.is_signed() || show_unsigned)
        .filter_map(|plugin| {
            let local = installed.iter().find(|l| l.id == plugin.slug)?;
            Some(LibraryEntry {
                slug: plugin.slug.clone(),
                name: plugin.name.clone(),
                org_name: plugin.org_name.clone(),
                installed_version: local.version.clone(),
                latest_version: Some(plugin.version.clone()),
                dev: local.dev,
                has_update: !local.dev && is_newer(&plugin.version, &local.version),
            })
        })
        .collect()
}

fn print_table(entries: &[LibraryEntry]) {
    if entries.is_empty() {
        println!("No plugins installed");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Org", "Installed", "Latest", "Status"]);

    for entry in entries {
        let status = if entry.dev {
            "dev build"
        } else if entry.has_update {
            "update available"
        } else {
            "up to date"
        };

        table.add_row(vec![
            entry.name.as_str(),
            entry.org_name.as_str(),
            entry.installed_version.as_str(),
            entry.latest_version.as_deref().unwrap_or("-"),
            status,
        ]);
    }

    println!("{table}");

    let updates = entries.iter().filter(|e| e.has_update).count();
    if updates > 0 {
        println!("{} plugin(s) have updates available", updates);
    }
}

#[cfg(test)]
#[path = "library_test.rs"]
mod tests;
