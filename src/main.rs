//! bdo-profile main entry point
//!
//! Without a subcommand this opens the interactive profile viewer. The
//! subcommands cover the guild tooling: roster download, batch profile
//! export, and gearscore averaging.

use anyhow::Context;
use bdo_profile::config::{load_or_default, Config};
use bdo_profile::export::{average_folder, run_batch, write_roster};
use bdo_profile::tui::{self, Theme};
use bdo_profile::ProfileClient;
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// bdo-profile: Black Desert family profile viewer
///
/// Looks up a family on the Black Desert website and shows its family
/// details, characters and life skills in the terminal.
#[derive(Parser, Debug)]
#[command(name = "bdo-profile")]
#[command(version)]
#[command(about = "Black Desert family profile viewer", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download a guild's member list to <GUILD>/<GUILD>_members.csv
    Roster {
        /// Guild name as shown on the website
        guild: String,
    },

    /// Fetch every member of a roster CSV into <nickname>.json files
    Batch {
        /// Roster file with Nickname,Ref rows
        #[arg(value_name = "INPUT.csv")]
        input: PathBuf,

        /// Directory the JSON files are written to
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },

    /// Average the gearscore of a folder of exported profiles
    Average {
        /// Folder to walk for *.json files
        folder: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, config_hash) =
        load_or_default(cli.config.as_deref()).context("Failed to load configuration")?;

    // The interactive session owns the terminal, so its log goes to a file
    let log_file = match cli.command {
        None => Some(config.output.log_file.as_str()),
        Some(_) => None,
    };
    setup_logging(cli.verbose, cli.quiet, log_file)?;

    match &config_hash {
        Some(hash) => tracing::info!("Configuration loaded (hash: {})", hash),
        None => tracing::info!("No configuration file given, using defaults"),
    }

    match cli.command {
        None => handle_interactive(config).await,
        Some(Commands::Roster { guild }) => handle_roster(config, &guild).await,
        Some(Commands::Batch { input, out_dir }) => handle_batch(config, &input, &out_dir).await,
        Some(Commands::Average { folder }) => handle_average(&folder),
    }
}

/// Sets up the tracing subscriber based on verbosity level
///
/// Logs go to stderr unless `log_file` is given.
fn setup_logging(verbose: u8, quiet: bool, log_file: Option<&str>) -> anyhow::Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("bdo_profile=info,warn"),
            1 => EnvFilter::new("bdo_profile=debug,info"),
            2 => EnvFilter::new("bdo_profile=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }

    Ok(())
}

/// Runs the full-screen search session
async fn handle_interactive(config: Config) -> anyhow::Result<()> {
    let client = ProfileClient::new(config)?;
    tui::run(client, Theme::default()).await?;
    Ok(())
}

/// Downloads a guild roster to the current directory
async fn handle_roster(config: Config, guild: &str) -> anyhow::Result<()> {
    let client = ProfileClient::new(config)?;

    let members = client
        .fetch_guild_members(guild)
        .await
        .with_context(|| format!("Failed to fetch guild '{}'", guild))?;
    write_roster(Path::new("."), guild, &members)?;

    println!("Fetched guild members for: {}", guild);
    println!("Found {} members", members.len());
    Ok(())
}

/// Exports one JSON profile per roster row
async fn handle_batch(config: Config, input: &Path, out_dir: &Path) -> anyhow::Result<()> {
    let client = ProfileClient::new(config)?;

    let report = run_batch(&client, input, out_dir)
        .await
        .with_context(|| format!("Failed to process {}", input.display()))?;

    tracing::info!(
        "Batch complete: {} written, {} failed",
        report.written.len(),
        report.failed.len()
    );
    if !report.failed.is_empty() {
        tracing::warn!("Failed members: {}", report.failed.join(", "));
    }
    Ok(())
}

/// Prints the gearscore average of a guild folder
fn handle_average(folder: &Path) -> anyhow::Result<()> {
    let result = average_folder(folder)
        .with_context(|| format!("Failed to average {}", folder.display()))?;

    let Some(average) = result.summary.average() else {
        println!("No gearscore values found");
        return Ok(());
    };

    println!("Parsing for guild: {}", result.guild);
    println!("Found {} members", result.summary.members());
    println!("Users with Private Data: {}", result.summary.private);
    println!("Average gearscore: {}", average);
    Ok(())
}
