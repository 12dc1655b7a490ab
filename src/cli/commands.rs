use std::path::PathBuf;
use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "orgdocs", version, about = "Publish AWS organization inventories to Outline")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Optional YAML settings file; environment variables take precedence
    #[arg(short, long, global = true, env = "ORGDOCS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replace the parent document's children with fresh organization reports
    Sync(SyncArgs),
    /// Render reports without touching any document
    Preview(PreviewArgs),
    /// Validate configuration without contacting any service
    Validate,
}

#[derive(Args, Clone)]
pub struct SyncArgs {
    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct PreviewArgs {
    /// Only render the organization with this label
    #[arg(long)]
    pub org: Option<String>,

    /// Write one <label>.md per organization into this directory instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
