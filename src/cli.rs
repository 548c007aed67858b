use clap::{Parser, Subcommand};

use crate::commands::{
    browse, discover, info, install, library, org, panel, uninstall, update,
};

#[derive(Debug, Parser)]
#[command(name = "pmp")]
#[command(about = "Plugin Marketplace CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// おすすめ・人気・新着のサマリー表示
    Discover(discover::Args),

    /// プラグインの検索・絞り込み一覧
    Browse(browse::Args),

    /// インストール済みプラグイン一覧
    Library(library::Args),

    /// 組織のプラグイン一覧
    Org(org::Args),

    /// プラグインの詳細表示
    Info(info::Args),

    /// プラグインをインストール
    Install(install::Args),

    /// プラグインを最新バージョンに更新
    Update(update::Args),

    /// プラグインを削除
    Uninstall(uninstall::Args),

    /// インタラクティブなマーケットプレイスパネルを起動
    Panel(panel::Args),
}
