//! CLI argument parsing using Clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Onboarding helpers for the agent: auth choices, token hints and the
/// post-install model routing patch.
#[derive(Parser, Debug)]
#[command(name = "onboard")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:
  onboard auth-options --include-skip       Flat option list
  onboard auth-options --grouped --json     Grouped view as JSON
  onboard auth-hint --expires-at 1700000000000
  onboard patch-models --root ./agent       Reroute xAI models in node_modules
")]
pub struct Cli {
    /// Log level for the workspace crates: trace, debug, info, warn or error
    #[arg(long, global = true, env = "ONBOARD_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log output format: pretty, json or compact
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Agent project root (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the authentication choices offered during onboarding
    AuthOptions(AuthOptionsArgs),

    /// Render the freshness hint for a stored OAuth token
    AuthHint(AuthHintArgs),

    /// Reroute the xAI models in the generated model table
    PatchModels(PatchModelsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct AuthOptionsArgs {
    /// Append the "Skip for now" option
    #[arg(long)]
    pub include_skip: bool,

    /// Group options by provider
    #[arg(long)]
    pub grouped: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Fail if a provider group references an unknown choice
    #[arg(long)]
    pub strict: bool,

    /// Never emit colors
    #[arg(long)]
    pub plain: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AuthHintArgs {
    /// Token expiry as Unix epoch milliseconds (omit or 0 for none)
    #[arg(long, allow_negative_numbers = true)]
    pub expires_at: Option<i64>,

    /// Render an expired token as refreshable
    #[arg(long)]
    pub allow_stale: bool,

    /// Never emit colors
    #[arg(long)]
    pub plain: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct PatchModelsArgs {
    /// Models module to patch, relative to the project root
    #[arg(long)]
    pub models_path: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

impl Commands {
    /// Whether setup problems must be reported instead of failing the process.
    ///
    /// `patch-models` runs as a post-install step and always exits 0.
    pub fn is_best_effort(&self) -> bool {
        matches!(self, Commands::PatchModels(_))
    }
}
