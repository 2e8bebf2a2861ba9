use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Convert CycloneDX SBOMs to SPDX 2.3 and prune dependencies from SPDX documents
#[derive(Parser, Debug)]
#[command(name = "spdx-sbom")]
#[command(version)]
#[command(
    about = "Convert CycloneDX SBOMs to SPDX 2.3 and prune dependencies from SPDX documents",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a CycloneDX JSON document into an SPDX 2.3 document
    Convert(ConvertArgs),
    /// Remove dependencies (and their relationships) from an SPDX document
    Prune(PruneArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// CycloneDX JSON input (plain or wrapped in a `spec.data` envelope)
    #[arg(long, value_name = "FILE")]
    pub cyclonedx: PathBuf,

    /// JSON array of dependency edges ({name, version, is_direct, parent}); `direct` is accepted for `is_direct`
    #[arg(long, value_name = "FILE")]
    pub dependencies: Option<PathBuf>,

    /// Project namespace, used in the document and application names
    #[arg(long)]
    pub namespace: String,

    /// Project UUID, used in the document name and application SPDX ID
    #[arg(long)]
    pub project_uuid: String,

    /// Organization recorded as a document creator and application supplier
    #[arg(long)]
    pub organization: Option<String>,

    /// Email recorded as a `Person:` document creator
    #[arg(long)]
    pub person_email: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to spdx-sbom.config.yml in the current directory)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct PruneArgs {
    /// SPDX 2.3 JSON input
    #[arg(long, value_name = "FILE")]
    pub spdx: PathBuf,

    /// File with one exclusion key per line (`name` or `name@version`)
    #[arg(long, value_name = "FILE")]
    pub exclusions: Option<PathBuf>,

    /// Exclude a dependency by `name` or `name@version`
    /// Can be specified multiple times: -e pytest -e "coverage@7.6.1"
    #[arg(short, long = "exclude", value_name = "KEY")]
    pub exclude: Vec<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the unpruned input document to this path
    #[arg(long, value_name = "FILE")]
    pub original_output: Option<PathBuf>,

    /// Config file path (defaults to spdx-sbom.config.yml in the current directory)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parses arguments, returning clap's error instead of exiting
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
