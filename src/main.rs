use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use kanjiview::config::Config;
use kanjiview::logging::init_tracing;
use kanjiview::router::Route;
use kanjiview::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "kanjiview", version, about = "Browse kanji in the terminal")]
struct Cli {
    /// Route to open: `/`, `/kanji` or `/kanji/<character>`.
    #[arg(default_value = "/")]
    route: Route,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Page size for the kanji list (6, 12, 24 or 48).
    #[arg(long, value_name = "N")]
    items_per_page: Option<usize>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    match runtime::run(config, cli.route) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "kanjiview exited with error");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;

    if let Some(items_per_page) = cli.items_per_page {
        config.list.items_per_page = items_per_page;
    }
    config.validate()?;
    Ok(config)
}
