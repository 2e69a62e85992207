//! CLI module for Tether
//!
//! Command-line interface definitions and handlers for the Tether import
//! reconciler.
//!
//! # Commands
//!
//! - `import` - Reconcile an import payload against provider state
//! - `status` - Show what is already linked in the local registry
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Import from a headless payload file
//! tether import --payload request.json
//!
//! # Same, machine-readable output
//! tether import --payload request.json --json
//!
//! # Generate shell completions
//! tether completions bash > ~/.bash_completion.d/tether
//! ```

pub mod completions;
pub mod config;
pub mod import;
pub mod output;
pub mod status;

pub use completions::handle_completions;
pub use config::handle_config_init;
pub use import::handle_import;
pub use status::handle_status;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tether - cloud auth import reconciler
#[derive(Parser, Debug)]
#[command(
    name = "tether",
    version,
    about = "Links existing cloud identity resources into a local project"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile an import payload against provider state
    Import(ImportArgs),
    /// Show locally registered resources
    Status(StatusArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the JSON import payload ("-" reads stdin)
    #[arg(short, long, default_value = "-")]
    pub payload: PathBuf,

    /// Output the descriptor as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "tether.toml")]
    pub config: PathBuf,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "TETHER_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "tether.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "tether.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
