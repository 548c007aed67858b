//! pmp discover コマンド
//!
//! おすすめ・人気・新着の各セクション（先頭5件）と、
//! 種別別ブラウズへの導線を表示する。

use crate::api::{BackendClient, RestClient};
use crate::catalog::{featured, most_popular, recently_added, select, Plugin, SelectCriteria};
use crate::config::Settings;
use crate::output::time_ago;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {}

pub async fn run(_args: Args) -> Result<(), String> {
    let settings = Settings::load().map_err(|e| e.to_string())?;
    let client = RestClient::from_settings(&settings);

    let plugins = client.list_plugins().await.map_err(|e| e.to_string())?;

    let criteria = SelectCriteria {
        show_unsigned: settings.show_unsigned,
        ..Default::default()
    };
    let selected = select(&plugins, &criteria);

    print_section("Featured", &featured(&selected));
    print_section("Most popular", &most_popular(&selected));
    print_section("Recently added", &recently_added(&selected));

    println!("Browse by type:");
    println!("  pmp browse --filter-by panel");
    println!("  pmp browse --filter-by datasource");
    println!("  pmp browse --filter-by app");

    Ok(())
}

fn print_section(title: &str, plugins: &[&Plugin]) {
    println!("{title}");

    if plugins.is_empty() {
        println!("  (none)\n");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Org", "Version", "Added"]);

    for plugin in plugins {
        table.add_row(vec![
            plugin.name.as_str(),
            plugin.org_name.as_str(),
            plugin.version.as_str(),
            &time_ago(&plugin.created_at),
        ]);
    }

    println!("{table}\n");
}
