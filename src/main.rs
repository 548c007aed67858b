mod api;
mod catalog;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod output;
mod query;
mod resolver;
mod tui;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
