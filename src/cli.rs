use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Check TLS certificate and CA bundle registries for missing governance metadata
#[derive(Parser, Debug)]
#[command(name = "tls-metadata-check")]
#[command(version)]
#[command(
    about = "Check TLS certificate and CA bundle registries for missing governance metadata",
    long_about = None
)]
pub struct Args {
    /// Path to the registry file (JSON or YAML)
    #[arg(short, long, value_name = "PATH")]
    pub registry: PathBuf,

    /// Output format: markdown or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Rule to run: missing-description or missing-owner
    /// Can be specified multiple times: --rule missing-description --rule missing-owner
    #[arg(long = "rule", value_name = "ID")]
    pub rules: Vec<String>,

    /// Baseline registry to audit the description metadata against
    #[arg(short, long, value_name = "PATH")]
    pub baseline: Option<PathBuf>,

    /// Path to a config file (defaults to tls-metadata-check.config.yml next to the registry)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parses arguments, leaving clap's error handling to the caller
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
