//! pmp panel コマンド
//!
//! インタラクティブなマーケットプレイスパネル（TUI）を起動する。

use crate::api::{BackendClient, RestClient};
use crate::config::Settings;
use crate::tui;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {}

pub async fn run(_args: Args) -> Result<(), String> {
    let settings = Settings::load().map_err(|e| e.to_string())?;
    let client = RestClient::from_settings(&settings);

    // 初期データを先に取得してからパネルを起動する
    let plugins = client.list_plugins().await.map_err(|e| e.to_string())?;
    let installed = client
        .list_installed(&settings.plugin_dir)
        .await
        .map_err(|e| e.to_string())?;

    tui::run(settings, client, plugins, installed).map_err(|e| e.to_string())
}
