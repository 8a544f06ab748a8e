use anyhow::Context;
use clap::Parser;
use devtoolbox::config::{Config, ConfigStore};
use devtoolbox::logging::init_tracing;
use devtoolbox::ui::runtime;
use std::path::PathBuf;

/// Terminal dashboard with text generation, JSON formatting and Base64 tools.
#[derive(Debug, Parser)]
#[command(name = "devtoolbox", version, about)]
struct Cli {
    /// Config file (default: ~/.config/devtoolbox/config.toml).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial route, e.g. /json-formatter.
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Override the generation model.
    #[arg(long, value_name = "NAME")]
    model: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    if let Some(model) = cli.model {
        config.generation.model = model;
        config.validate()?;
    }
    tracing::info!(
        config = %path.display(),
        model = %config.generation.model,
        credential = config.generation.is_configured(),
        "Starting devtoolbox"
    );

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let store = ConfigStore::new(config, path);
    runtime::run(store, rt.handle().clone(), cli.route.as_deref())?;
    Ok(())
}
