//! Enlaces-SAT main entry point
//!
//! This is the command-line interface for the SAT vehicle-import link
//! harvester.

use anyhow::Context;
use clap::Parser;
use enlaces_sat::config::{default_config, load_config, Config};
use enlaces_sat::harvester::{build_http_client, harvest_links};
use enlaces_sat::output::{save_links, SaveOutcome};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Enlaces-SAT: harvests vehicle-import archive links from the SAT portal
///
/// Fetches the download page of the SAT (Guatemala) portal, extracts the ZIP
/// archive links for the configured years, and writes the sorted unique list
/// to a text file, one URL per line.
#[derive(Parser, Debug)]
#[command(name = "enlaces-sat")]
#[command(version = "1.0.0")]
#[command(about = "Harvests SAT vehicle-import archive links", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file (built-in defaults
    /// otherwise)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Overwrite the output file without asking
    #[arg(short, long)]
    force: bool,

    /// Fetch and list the links without writing the output file
    #[arg(long, conflicts_with = "force")]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, falling back to the built-in SAT portal defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
        None => default_config().context("built-in default configuration is invalid")?,
    };

    let client = build_http_client(config.source.timeout_secs)
        .context("failed to build the HTTP client")?;

    if cli.dry_run {
        handle_dry_run(&client, &config).await
    } else {
        handle_save(&client, &config, cli.force).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("enlaces_sat=info,warn"),
            1 => EnvFilter::new("enlaces_sat=debug,info"),
            2 => EnvFilter::new("enlaces_sat=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: fetches and lists the links without writing
async fn handle_dry_run(client: &reqwest::Client, config: &Config) -> anyhow::Result<()> {
    println!("Obteniendo enlaces...");
    let links = harvest_links(client, config).await?;

    for link in &links {
        println!("{}", link);
    }
    println!("{} enlaces encontrados (sin guardar)", links.len());

    Ok(())
}

/// Handles the default mode: harvest and write, with the overwrite gate
async fn handle_save(client: &reqwest::Client, config: &Config, force: bool) -> anyhow::Result<()> {
    // The prompt runs before any network request; declining skips both the
    // fetch and the write, so "Obteniendo enlaces..." only appears once the
    // run is actually going ahead
    let will_prompt = !force && Path::new(&config.output.links_path).exists();
    if !will_prompt {
        println!("Obteniendo enlaces...");
    }

    let confirm = |path: &Path| {
        let proceed = prompt_overwrite(path);
        if proceed {
            println!("Obteniendo enlaces...");
        }
        proceed
    };

    match save_links(client, config, force, confirm).await? {
        SaveOutcome::Written(count) => {
            println!("{} enlaces guardados en {}", count, config.output.links_path);
        }
        SaveOutcome::Cancelled => {
            println!("Proceso cancelado.");
        }
    }

    Ok(())
}

/// Interactive overwrite confirmation: input "s" proceeds, anything else
/// cancels
fn prompt_overwrite(path: &Path) -> bool {
    print!(
        "El archivo '{}' ya existe. ¿Deseas rehacer el proceso? (s/n): ",
        path.display()
    );
    let _ = std::io::stdout().flush();

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }

    answer.trim().eq_ignore_ascii_case("s")
}
