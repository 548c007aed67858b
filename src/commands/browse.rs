//! pmp browse コマンド
//!
//! マーケットプレイスのプラグインを検索・絞り込み・ソートして表示する。

use crate::api::{BackendClient, RestClient};
use crate::catalog::{select, Plugin, SelectCriteria, SortField};
use crate::config::Settings;
use crate::output::time_ago;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// 検索クエリ（名前・組織名の部分一致）
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// 種別で絞り込み（panel / datasource / app、"all" で全件）
    #[arg(long = "filter-by")]
    pub filter_by: Option<String>,

    /// ソートキー
    #[arg(long = "sort-by", value_enum, default_value_t = SortField::Name)]
    pub sort_by: SortField,

    /// JSON形式で出力
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// スラッグのみ出力
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let settings = Settings::load().map_err(|e| e.to_string())?;
    let client = RestClient::from_settings(&settings);

    // 1. 全件取得（絞り込みはクライアント側）
    let plugins = client.list_plugins().await.map_err(|e| e.to_string())?;

    // 2. パイプラインで絞り込み・ソート
    let criteria = SelectCriteria {
        query: args.query.clone(),
        type_filter: args.filter_by.clone(),
        org: None,
        sort: args.sort_by,
        show_unsigned: settings.show_unsigned,
    };
    let selected = select(&plugins, &criteria);

    // 3. 出力
    if args.json {
        print_json(&selected)?;
    } else if args.simple {
        print_simple(&selected);
    } else {
        println!("{} results", selected.len());
        print_table(&selected);
    }

    Ok(())
}

fn print_table(plugins: &[&Plugin]) {
    if plugins.is_empty() {
        println!("No plugins matched");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Org", "Type", "Version", "Downloads", "Updated"]);

    for plugin in plugins {
        table.add_row(vec![
            plugin.name.as_str(),
            plugin.org_name.as_str(),
            plugin.type_code.as_str(),
            plugin.version.as_str(),
            &plugin.downloads.to_string(),
            &time_ago(&plugin.updated_at),
        ]);
    }

    println!("{table}");
}

fn print_json(plugins: &[&Plugin]) -> Result<(), String> {
    serde_json::to_string_pretty(plugins)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize plugins: {}", e))
}

fn print_simple(plugins: &[&Plugin]) {
    for plugin in plugins {
        println!("{}", plugin.slug);
    }
}
