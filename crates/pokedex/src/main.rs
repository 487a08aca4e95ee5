use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod error;
mod list;
mod pages;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse a Pokémon dataset and render pagination bars"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Path to a TOML configuration file
    #[clap(long, env = "POKEDEX_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Whether to display additional information.
    #[clap(long, env = "POKEDEX_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Print the page numbers a pagination bar shows
    Pages(crate::pages::App),

    /// List Pokémon from a dataset file
    List(crate::list::App),
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = App::parse();
    init_logger(app.global.verbose);

    match app.command {
        SubCommands::Pages(sub_app) => crate::pages::run(sub_app, app.global),
        SubCommands::List(sub_app) => crate::list::run(sub_app, app.global),
    }
}
