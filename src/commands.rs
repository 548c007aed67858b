use crate::cli::Command;

pub mod browse;
pub mod discover;
pub mod info;
pub mod install;
pub mod library;
pub mod org;
pub mod panel;
pub mod uninstall;
pub mod update;

pub async fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        Command::Discover(args) => discover::run(args).await,
        Command::Browse(args) => browse::run(args).await,
        Command::Library(args) => library::run(args).await,
        Command::Org(args) => org::run(args).await,
        Command::Info(args) => info::run(args).await,
        Command::Install(args) => install::run(args).await,
        Command::Update(args) => update::run(args).await,
        Command::Uninstall(args) => uninstall::run(args).await,
        Command::Panel(args) => panel::run(args).await,
    }
}
