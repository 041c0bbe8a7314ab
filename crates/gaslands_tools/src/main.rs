//! Gaslands roster builder - command line tools

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use gaslands_core::catalog::Catalog;
use gaslands_core::codec::RosterCodec;
use gaslands_core::config::BuilderConfig;
use gaslands_tools::generate::{random_team, RandomTeamOptions};
use gaslands_tools::report::{catalog_lines, TeamReport};
use gaslands_tools::validate::{builtin_catalog, validate_catalog};
use gaslands_tools::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gaslands-tools")]
#[command(about = "Command line tools for the Gaslands roster builder")]
struct Cli {
    /// Builder configuration (RON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog to use instead of the embedded one (RON)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a catalog file
    Validate {
        /// Catalog file; the embedded catalog when omitted
        path: Option<PathBuf>,
    },
    /// Decode a roster token and print it as JSON with derived stats
    Decode {
        /// Roster token, with or without a leading '?'
        token: String,
    },
    /// Build a random team and print its token
    Random {
        /// Lowest cost target per vehicle
        #[arg(long)]
        min: Option<u32>,
        /// Highest cost target per vehicle
        #[arg(long)]
        max: Option<u32>,
        /// Number of vehicles
        #[arg(long, default_value_t = 3)]
        count: usize,
        /// RNG seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Team name
        #[arg(long)]
        name: Option<String>,
        /// Print the full JSON report instead of the bare token
        #[arg(long)]
        json: bool,
    },
    /// List catalog entries
    Catalog,
}

fn load_config(path: Option<&Path>) -> Result<BuilderConfig> {
    match path {
        Some(path) => Ok(BuilderConfig::load(path)?),
        None => Ok(BuilderConfig::default()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let custom_catalog = cli.catalog.as_deref().map(Catalog::load).transpose()?;
    let catalog = match &custom_catalog {
        Some(catalog) => catalog,
        None => builtin_catalog()?,
    };
    let codec = RosterCodec::new(catalog);

    match cli.command {
        Commands::Validate { path } => {
            tracing::info!(
                "Validating catalog: {}",
                path.as_deref()
                    .map_or_else(|| "<builtin>".to_string(), |p| p.display().to_string())
            );
            let summary = validate_catalog(path.as_deref())?;
            tracing::info!(
                "Validation passed: {} vehicle types, {} weapons, {} upgrades",
                summary.vehicles,
                summary.weapons,
                summary.upgrades
            );
        }
        Commands::Decode { token } => {
            let token = token.strip_prefix('?').unwrap_or(&token);
            let team = codec.try_decode(token)?;
            println!("{}", TeamReport::of(&team, None).to_json()?);
        }
        Commands::Random {
            min,
            max,
            count,
            seed,
            name,
            json,
        } => {
            let (default_min, default_max) = config.random_cost_range;
            let options = RandomTeamOptions {
                min: min.unwrap_or(default_min),
                max: max.unwrap_or(default_max),
                count,
                seed,
                name,
            };
            let team = random_team(catalog, &options, &config);
            let token = codec.encode(&team)?;
            if json {
                println!("{}", TeamReport::of(&team, Some(token)).to_json()?);
            } else {
                println!("{token}");
            }
        }
        Commands::Catalog => {
            for line in catalog_lines(catalog) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
