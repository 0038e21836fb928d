//! TxtRipper main entry point
//!
//! This is the command-line interface for the TxtRipper robots.txt ripper.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use txtripper::config::{load_config, validate, Config};
use txtripper::fetch::{FetchOutcome, FetchSession};
use txtripper::robots::extract_directives;
use txtripper::targets::generate_targets;

/// TxtRipper: rip robots.txt files for recon
///
/// TxtRipper fetches a site's robots.txt (HTTPS first, HTTP fallback),
/// extracts Disallow directives, and derives candidate base URLs for
/// directory bruteforce tooling.
#[derive(Parser, Debug)]
#[command(name = "txtripper")]
#[command(version)]
#[command(about = "Rip robots.txt files and derive bruteforce targets", long_about = None)]
struct Cli {
    /// Single domain or URL to fetch robots.txt from
    #[arg(short, long, value_name = "URL", conflicts_with = "list")]
    url: Option<String>,

    /// File containing domains or URLs, one per line
    #[arg(short, long, value_name = "FILE")]
    list: Option<PathBuf>,

    /// Show only Disallow lines from the fetched content
    #[arg(short = 'd', long = "disallow")]
    disallow_only: bool,

    /// Derive and print bruteforce target URLs from Disallow lines
    #[arg(short, long)]
    targets: bool,

    /// Maximum redirect hops followed per scheme attempt
    #[arg(long, value_name = "N")]
    redirect_limit: Option<u32>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

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

    // Load configuration (defaults when no file is given)
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(limit) = cli.redirect_limit {
        config.fetch.redirect_limit = limit;
    }
    // Flags merge over the loaded values, so validate the result too
    validate(&config).context("invalid fetch options")?;

    let mut session =
        FetchSession::new(&config.fetch).context("failed to build HTTP client")?;

    if let Some(url) = &cli.url {
        process_domain(&mut session, url, &cli).await;
    } else if let Some(list) = &cli.list {
        let content = std::fs::read_to_string(list)
            .with_context(|| format!("file '{}' not found", list.display()))?;
        tracing::info!("processing domains listed in: {}", list.display());

        for (index, line) in content.lines().enumerate() {
            let domain = line.trim();
            if domain.is_empty() || domain.starts_with('#') {
                continue;
            }
            println!("\nProcessing domain/URL {}: {}", index + 1, domain);
            // One domain's total failure never aborts the rest of the list
            process_domain(&mut session, domain, &cli).await;
            println!("============================");
        }
    } else {
        bail!("please specify either --url or --list (see --help)");
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("txtripper=info,warn"),
            1 => EnvFilter::new("txtripper=debug,info"),
            2 => EnvFilter::new("txtripper=trace,debug"),
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

/// Fetches one domain and renders content, directives, and targets
async fn process_domain(session: &mut FetchSession, input: &str, cli: &Cli) {
    let outcome = session.fetch(input).await;

    let file = match &outcome {
        FetchOutcome::Fetched(file) => file,
        FetchOutcome::CouldNotFetch(failure) => {
            print!("{}", failure);
            return;
        }
    };

    println!("--- robots.txt content for {} ---", input);

    let directives = extract_directives(&file.body);

    if cli.disallow_only || cli.targets {
        if directives.is_empty() {
            println!("No Disallow lines found in robots.txt.");
        } else {
            for directive in &directives {
                println!("{}", directive.raw);
            }
        }
    } else {
        println!("{}", file.body);
    }

    if cli.targets && !directives.is_empty() {
        let base = session.base_url(input);
        println!("--- bruteforce targets (base {}) ---", base);
        for directive in &directives {
            for target in generate_targets(directive, &base) {
                println!("{}", target.url);
            }
        }
    }

    println!("--------------------------");
}
