use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use web_versions::cli::{Query, run_query};
use web_versions::config::{AppConfig, log_path};
use web_versions::logging;
use web_versions::version::backends::GitBackend;
use web_versions::version::catalog::VersionCatalog;

#[derive(Parser)]
#[command(name = "web-versions")]
#[command(version, about = "Reads versions of a web from git branches and tags")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/web-versions/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Repository to read, overrides the config
    #[arg(long, short, global = true)]
    repository: Option<PathBuf>,

    /// Name of the unstable version, overrides the config
    #[arg(long, global = true)]
    unstable: Option<String>,

    /// Print the answer as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    query: Query,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init_or_disable(&log_path());

    let mut config = AppConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(repository) = cli.repository {
        config.repository_dir = repository;
    }
    if let Some(unstable) = cli.unstable {
        config.last_unstable_version = unstable;
    }

    let repository = config.repository_dir.to_string_lossy().into_owned();
    info!("Querying {:?} in {}", cli.query, repository);

    let catalog = VersionCatalog::new(
        Arc::new(GitBackend::new()),
        repository,
        Some(config.last_unstable_version.as_str()),
    )
    .with_labels(config.labels);

    let output = run_query(&catalog, &cli.query).inspect_err(|e| error!("Query failed: {}", e))?;

    if cli.json {
        println!("{}", output.to_json()?);
    } else {
        println!("{}", output.to_text());
    }

    Ok(())
}
