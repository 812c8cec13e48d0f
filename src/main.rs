use anyhow::Result;
use clap::Parser;
use chartdex::catalog::DEFAULT_REPO_ALIAS;
use chartdex::commands::{self, Config, Selection, config::DEFAULT_TIMEOUT_SECS};
use chartdex::error::LoadError;
use chartdex::http::DEFAULT_RETRIES;
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

/// chartdex - Helm chart repository catalog
///
/// Load a chart repository index and browse its charts.
///
/// Examples:
///   chartdex --index https://charts.example.com list --search redis
///   chartdex show nginx --version 1.2.0
///   chartdex render --expand nginx --out catalog.html
#[derive(Parser, Debug)]
#[command(author, version = env!("CHARTDEX_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Index URL, repository root URL, or local path (also via CHARTDEX_INDEX)
    #[arg(
        long = "index",
        short = 'i',
        env = "CHARTDEX_INDEX",
        value_name = "URL|PATH",
        default_value = "index.yaml",
        global = true
    )]
    pub index: String,

    /// Repository alias used in install commands (also via CHARTDEX_REPO_ALIAS)
    #[arg(
        long = "repo-alias",
        env = "CHARTDEX_REPO_ALIAS",
        value_name = "ALIAS",
        default_value = DEFAULT_REPO_ALIAS,
        global = true
    )]
    pub repo_alias: String,

    /// Request timeout in seconds when fetching the index
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS, global = true)]
    pub timeout: u64,

    /// Retries after a transient network failure
    #[arg(long, value_name = "N", default_value_t = DEFAULT_RETRIES, global = true)]
    pub retries: usize,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List charts, optionally filtered by a search term
    List(ListArgs),

    /// Show the details of a chart release
    Show(ShowArgs),

    /// Print the helm install command for a chart release
    InstallCommand(InstallCommandArgs),

    /// Render the catalog as an HTML fragment
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive match on name, description or keywords
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Print the catalog view as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Chart name
    #[arg(value_name = "CHART")]
    pub chart: String,

    /// Chart version (defaults to the newest)
    #[arg(long, short = 'v')]
    pub version: Option<String>,

    /// Print the details as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct InstallCommandArgs {
    /// Chart name
    #[arg(value_name = "CHART")]
    pub chart: String,

    /// Chart version (defaults to the newest)
    #[arg(long, short = 'v')]
    pub version: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Case-insensitive match on name, description or keywords
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Expand the detail panel of a chart (repeatable)
    #[arg(long, value_name = "CHART")]
    pub expand: Vec<String>,

    /// Show a specific version of a chart (repeatable)
    #[arg(long, value_name = "CHART=VERSION")]
    pub select: Vec<Selection>,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // The load failure message is already on stderr.
        Err(e) if e.downcast_ref::<LoadError>().is_some() => {
            debug!("{:#}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::new(
        chartdex::runtime::RealRuntime,
        &cli.index,
        cli.repo_alias,
        Duration::from_secs(cli.timeout),
        cli.retries,
    )?;

    match cli.command {
        Commands::List(args) => commands::list(config, args.search, args.json).await?,
        Commands::Show(args) => {
            commands::show(config, &args.chart, args.version.as_deref(), args.json).await?
        }
        Commands::InstallCommand(args) => {
            commands::install_command(config, &args.chart, args.version.as_deref()).await?
        }
        Commands::Render(args) => {
            commands::render(config, args.search, args.expand, args.select, args.out).await?
        }
    }
    Ok(())
}
