//! Identifiers of agent auth profiles imported from other CLIs.
//!
//! These are opaque keys into the agent's profile store. The choice builders
//! do not consult them; they are exported so callers that sync external CLI
//! credentials share one spelling.

/// Profile synced from the Claude CLI credential file.
pub const CLAUDE_CLI_PROFILE_ID: &str = "anthropic:claude-cli";

/// Profile synced from the Codex CLI credential file.
pub const CODEX_CLI_PROFILE_ID: &str = "openai-codex:codex-cli";

pub fn known_profile_ids() -> [&'static str; 2] {
    [CLAUDE_CLI_PROFILE_ID, CODEX_CLI_PROFILE_ID]
}
