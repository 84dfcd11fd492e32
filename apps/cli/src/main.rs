//! Command-line interface for the Solidity token generator
//!
//! Reads a token configuration as JSON and either validates it or writes
//! the generated contract source.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use heck::ToSnakeCase;
use ingot_models::TokenConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ingot", about = "Solidity token contract generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate contract source from a token configuration
    Generate {
        /// Path to a token configuration JSON document
        #[arg(long)]
        config: PathBuf,
        /// Output file; defaults to the snake_cased contract name with a
        /// `.sol` extension
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print the source to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Check a token configuration for missing required fields
    Validate {
        /// Path to a token configuration JSON document
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            config,
            out,
            stdout,
        } => generate(&config, out, stdout),
        Command::Validate { config } => validate(&config),
    }
}

fn load_config(path: &Path) -> Result<TokenConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading configuration {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing configuration {}", path.display()))
}

fn generate(config_path: &Path, out: Option<PathBuf>, stdout: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let code = ingot_codegen::generate(&config);

    if stdout {
        print!("{code}");
        return Ok(());
    }

    let out = out.unwrap_or_else(|| default_output_path(&config));
    fs::write(&out, &code).with_context(|| format!("writing contract {}", out.display()))?;
    tracing::info!(
        standard = %config.standard(),
        contract = %config.contract_name(),
        out = %out.display(),
        "generated contract source"
    );
    Ok(())
}

fn default_output_path(config: &TokenConfig) -> PathBuf {
    let name = config.contract_name();
    let stem = if name.is_empty() {
        "contract".to_string()
    } else {
        name.to_snake_case()
    };
    PathBuf::from(format!("{stem}.sol"))
}

fn validate(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    ingot_codegen::validate::validate(&config)
        .with_context(|| format!("invalid configuration {}", config_path.display()))?;
    println!(
        "{} configuration for `{}` is complete",
        config.standard(),
        config.contract_name()
    );
    Ok(())
}
