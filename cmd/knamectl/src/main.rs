mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pkg_constants::paths::DEFAULT_CONFIG;
use pkg_naming::config::{NamingConfigFile, OutputFormat, load_config_file};
use report::{
    FailurePolicy, KebabReport, NameReport, render_kebab, render_sanitized, render_validated,
};
use std::io::{self, BufRead};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "knamectl", about = "Turn arbitrary strings into cluster resource names")]
struct Cli {
    /// Path to YAML config file
    #[arg(long, short, global = true, default_value = DEFAULT_CONFIG)]
    config: String,

    /// Output format: plain, json or yaml
    #[arg(long, short, global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sanitize names given as arguments, or one per line from stdin
    Sanitize {
        names: Vec<String>,

        /// Fail if any name sanitizes to an empty string
        #[arg(long)]
        reject_empty: bool,

        /// Fail if any sanitized name breaks the resource-name rules
        #[arg(long)]
        validate: bool,
    },
    /// Check names against the resource-name rules without changing them
    Validate {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the kebab-case form of each name
    Kebab {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let file_cfg: NamingConfigFile = load_config_file(&cli.config)?;
    debug!("Config file: {}", cli.config);

    // Merge: CLI args > config file > defaults
    let output = cli.output.or(file_cfg.output).unwrap_or_default();

    match cli.command {
        Commands::Sanitize {
            names,
            reject_empty,
            validate,
        } => {
            let policy = FailurePolicy {
                reject_empty: reject_empty || file_cfg.reject_empty.unwrap_or(false),
                require_valid: validate || file_cfg.validate.unwrap_or(false),
            };
            let names = if names.is_empty() {
                read_stdin_names()?
            } else {
                names
            };
            info!("Sanitizing {} names ({:?})", names.len(), policy);

            let reports: Vec<NameReport> =
                names.iter().map(|n| NameReport::sanitized(n)).collect();
            for r in reports.iter().filter(|r| r.sanitized.is_empty()) {
                warn!("'{}' sanitized to an empty name", r.input);
            }
            println!("{}", render_sanitized(&reports, output)?);
            policy.check(&reports)?;
        }
        Commands::Validate { names } => {
            info!("Validating {} names", names.len());
            let reports: Vec<NameReport> =
                names.iter().map(|n| NameReport::validated(n)).collect();
            println!("{}", render_validated(&reports, output)?);
            FailurePolicy {
                reject_empty: false,
                require_valid: true,
            }
            .check(&reports)?;
        }
        Commands::Kebab { names } => {
            let reports: Vec<KebabReport> = names.iter().map(|n| KebabReport::new(n)).collect();
            println!("{}", render_kebab(&reports, output)?);
        }
    }

    Ok(())
}

fn read_stdin_names() -> Result<Vec<String>> {
    read_names(io::stdin().lock()).context("failed to read names from stdin")
}

/// One name per line. Blank lines are skipped; other lines are kept as-is
/// apart from their line terminator, so they sanitize like arguments do.
fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            names.push(line);
        }
    }
    Ok(names)
}
