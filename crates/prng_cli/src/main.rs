//! prng - Command Line Front End for the Sampling Engines
//!
//! # Commands
//!
//! - `prng sample <distribution> [params...] -n N` - Print samples
//! - `prng state save|restore|skip` - Inspect and manipulate engine state
//! - `prng check` - Run the determinism and CDF self-check
//!
//! # Configuration
//!
//! Engine, seed, log level and default sample count come from CLI flags,
//! then `PRNG_*` environment variables, then an optional TOML file.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prng_cli::commands::{self, sample::DistributionArgs, state::StateAction, OutputFormat};
use prng_cli::config::{build_config, CliArgs as ConfigCliArgs};

/// Deterministic random sampling CLI
#[derive(Parser)]
#[command(name = "prng")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Engine (splitmix64, xorshift-add, xorshift128plus)
    #[arg(short, long, global = true)]
    engine: Option<String>,

    /// Seed text; omit to seed from transient entropy
    #[arg(short, long, global = true)]
    seed: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw samples from a distribution
    Sample {
        /// Number of samples (defaults to the configured sample count)
        #[arg(short = 'n', long, global = true)]
        count: Option<usize>,

        #[command(subcommand)]
        distribution: DistributionArgs,
    },

    /// Save, restore or skip engine state
    State {
        #[command(subcommand)]
        action: StateAction,
    },

    /// Run the self-check
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_args = ConfigCliArgs {
        config_file: cli.config.clone(),
        engine: cli.engine.clone(),
        seed: cli.seed.clone(),
        log_level: if cli.verbose {
            Some("debug".to_string())
        } else {
            cli.log_level.clone()
        },
        sample_count: match &cli.command {
            Commands::Sample { count, .. } => *count,
            _ => None,
        },
    };
    let config = build_config(&config_args).context("failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        version = prng_cli::VERSION,
        engine = %config.engine,
        seeded = config.seed.is_some(),
        "prng started"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Sample {
            count,
            distribution,
        } => commands::sample::run(&config, &distribution, count, cli.format, &mut out)
            .with_context(|| format!("sampling {} failed", distribution.name()))?,
        Commands::State { action } => {
            commands::state::run(&config, &action, cli.format, &mut out)
                .context("state command failed")?
        }
        Commands::Check => commands::check::run(&config).context("self-check failed")?,
    }
    Ok(())
}
