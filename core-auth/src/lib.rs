//! # Authentication Choice Module
//!
//! Builds the authentication choices offered during onboarding and the
//! token-freshness hints shown next to stored credentials.
//!
//! ## Overview
//!
//! The interactive prompt renders two shapes of the same data: a flat list of
//! options and the same options grouped by provider. Both are derived from a
//! single option builder plus a static group table, so the two views cannot
//! drift apart. Hints are rendered through an injected
//! [`StyleRenderer`](bridge_traits::StyleRenderer) and
//! [`Clock`](bridge_traits::Clock), which keeps every function here pure.
//!
//! ## Features
//!
//! - Flat option list with an optional trailing "Skip for now"
//! - Provider groups resolved from a static table, tolerant of unknown choices
//! - Strict validation of the group table for tests and `--strict` runs
//! - Token expiry hints with muted / warn / error / success styling

pub mod choices;
pub mod error;
pub mod hint;
pub mod profiles;
pub mod types;

pub use choices::{
    build_auth_choice_groups, build_auth_choice_groups_strict, build_auth_choice_options,
    resolve_groups, skip_option, validate_group_defs, AUTH_CHOICE_GROUP_DEFS, SKIP_CHOICE,
    XAI_API_KEY_CHOICE,
};
pub use error::{AuthError, Result};
pub use hint::{
    describe_expiry, format_duration, format_oauth_hint, ExpiryHint, ExpiryHintFormatter,
    ExpiryStatus, HintOptions,
};
pub use profiles::{known_profile_ids, CLAUDE_CLI_PROFILE_ID, CODEX_CLI_PROFILE_ID};
pub use types::{
    AuthChoiceGroup, AuthChoiceGroupDef, AuthChoiceGroups, AuthChoiceOption, AuthChoiceParams,
    ProviderKind,
};
