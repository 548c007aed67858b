//! pmp org コマンド
//!
//! 指定した組織が公開しているプラグインの一覧を表示する。

use crate::api::{BackendClient, RestClient};
use crate::catalog::{select, Plugin, SelectCriteria, SortField};
use crate::config::Settings;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    /// 組織スラッグ（例: "grafana"）
    pub org_slug: String,

    /// ソートキー
    #[arg(long = "sort-by", value_enum, default_value_t = SortField::Name)]
    pub sort_by: SortField,

    /// JSON形式で出力
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let settings = Settings::load().map_err(|e| e.to_string())?;
    let client = RestClient::from_settings(&settings);

    let plugins = client.list_plugins().await.map_err(|e| e.to_string())?;

    let criteria = SelectCriteria {
        org: Some(args.org_slug.clone()),
        sort: args.sort_by,
        show_unsigned: settings.show_unsigned,
        ..Default::default()
    };
    let selected = select(&plugins, &criteria);

    if args.json {
        return serde_json::to_string_pretty(&selected)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize plugins: {}", e));
    }

    println!("{}", args.org_slug);
    print_table(&selected);
    Ok(())
}

fn print_table(plugins: &[&Plugin]) {
    if plugins.is_empty() {
        println!("No plugins found for this org");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Type", "Version", "Downloads"]);

    for plugin in plugins {
        table.add_row(vec![
            plugin.name.as_str(),
            plugin.type_code.as_str(),
            plugin.version.as_str(),
            &plugin.downloads.to_string(),
        ]);
    }

    println!("{table}");
}
