//! Onboarding helpers for the agent CLI.
//!
//! This crate wires the workspace crates into the `onboard` binary. Hosts that
//! only need the builders can depend on `core-auth` and `core-models`
//! directly; the re-exports here cover the common case.

pub mod cli;
pub mod commands;

pub use core_auth::{
    build_auth_choice_groups, build_auth_choice_options, format_oauth_hint, AuthChoiceGroups,
    AuthChoiceOption, AuthChoiceParams, HintOptions,
};
pub use core_models::{patch_models_file, patch_models_source, PatchOutcome};
pub use core_runtime::config::{OnboardConfig, OnboardFlags};
