use std::path::PathBuf;

use clap::Parser;

use shopgrid::config::{Config, ConfigStore};
use shopgrid::trace::init_tracing;
use shopgrid::ui::runtime;

/// Terminal storefront for a remote product index.
#[derive(Debug, Parser)]
#[command(name = "shopgrid", version, about)]
struct Cli {
    /// Path to the config file (defaults to ~/.config/shopgrid/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the product query endpoint URL.
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let (mut config, path) = match &cli.config {
        Some(path) => (Config::load_from(path)?, path.clone()),
        None => (Config::load()?, Config::config_path()),
    };

    if let Some(endpoint) = cli.endpoint {
        config.search.endpoint = endpoint;
        config.validate()?;
    }

    runtime::run(ConfigStore::new(config, path))
}
