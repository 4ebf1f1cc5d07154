//! Command bodies behind the CLI.
//!
//! Each command takes a resolved [`OnboardConfig`] and returns the text to
//! print, so the binary only handles argument parsing and process exit.

use std::path::Path;

use anyhow::{Context, Result};
use bridge_traits::{StyleRenderer, StyleToken};
use core_auth::{
    build_auth_choice_groups, build_auth_choice_groups_strict, build_auth_choice_options,
    validate_group_defs, AuthChoiceGroups, AuthChoiceOption, AuthChoiceParams, ExpiryHintFormatter,
    HintOptions, AUTH_CHOICE_GROUP_DEFS,
};
use core_models::{patch_models_file, PatchOutcome};
use core_runtime::config::{OnboardConfig, OnboardFlags};
use core_runtime::logging::{strip_path, LoggingConfig};
use tracing::debug;

use crate::cli::{AuthHintArgs, AuthOptionsArgs, Cli};

/// Logging setup for one invocation, plus a warning to print once it is
/// installed.
///
/// Best-effort commands fall back to the default configuration when the
/// level or format is unusable; every other command fails.
pub fn logging_config(cli: &Cli) -> Result<(LoggingConfig, Option<String>)> {
    match LoggingConfig::from_names(&cli.log_level, cli.log_format.as_deref()) {
        Ok(config) => Ok((config, None)),
        Err(e) if cli.command.is_best_effort() => Ok((
            LoggingConfig::default(),
            Some(format!("{}; using default logging", e)),
        )),
        Err(e) => Err(e).context("Invalid logging options"),
    }
}

/// Build the runtime configuration for one CLI invocation.
pub fn build_config(
    root: Option<&Path>,
    models_path: Option<&Path>,
    flags: OnboardFlags,
) -> Result<OnboardConfig> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir().context("Could not determine the working directory")?,
    };

    let mut builder = OnboardConfig::builder().project_root(root).flags(flags);
    if let Some(path) = models_path {
        builder = builder.models_path(path);
    }

    builder.build().context("Invalid onboarding configuration")
}

pub fn auth_options_flags(args: &AuthOptionsArgs) -> OnboardFlags {
    OnboardFlags {
        strict_auth_groups: args.strict,
        plain_output: args.plain,
        ..OnboardFlags::default()
    }
}

pub fn auth_hint_flags(args: &AuthHintArgs) -> OnboardFlags {
    OnboardFlags {
        allow_stale_hints: args.allow_stale,
        plain_output: args.plain,
        ..OnboardFlags::default()
    }
}

fn render_option(renderer: &dyn StyleRenderer, rich: bool, option: &AuthChoiceOption) -> String {
    let mut line = format!(
        "{}  {}",
        renderer.colorize(rich, StyleToken::Accent, &option.value),
        option.label
    );
    if let Some(hint) = &option.hint {
        line.push_str(&renderer.colorize(rich, StyleToken::Muted, &format!(" · {}", hint)));
    }
    line
}

fn render_groups(renderer: &dyn StyleRenderer, grouped: &AuthChoiceGroups) -> String {
    let rich = renderer.is_rich();
    let mut lines = Vec::new();

    for group in &grouped.groups {
        lines.push(format!(
            "{} {}",
            renderer.colorize(rich, StyleToken::Info, &group.label),
            renderer.colorize(rich, StyleToken::Muted, &format!("({})", group.hint))
        ));
        for option in &group.options {
            lines.push(format!("  {}", render_option(renderer, rich, option)));
        }
    }

    if let Some(skip) = &grouped.skip_option {
        lines.push(render_option(renderer, rich, skip));
    }

    lines.join("\n")
}

fn render_options(renderer: &dyn StyleRenderer, options: &[AuthChoiceOption]) -> String {
    let rich = renderer.is_rich();
    options
        .iter()
        .map(|option| render_option(renderer, rich, option))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `onboard auth-options`
pub fn auth_options(config: &OnboardConfig, args: &AuthOptionsArgs) -> Result<String> {
    let params = AuthChoiceParams {
        include_skip: args.include_skip,
    };
    let strict = config.flags.strict_auth_groups;
    let renderer = config.style_renderer.as_ref();

    if args.grouped {
        let grouped = if strict {
            build_auth_choice_groups_strict(&params)?
        } else {
            build_auth_choice_groups(&params)
        };
        debug!(groups = grouped.groups.len(), strict, "Built auth choice groups");

        return if args.json {
            Ok(serde_json::to_string_pretty(&grouped)?)
        } else {
            Ok(render_groups(renderer, &grouped))
        };
    }

    if strict {
        let base = build_auth_choice_options(&AuthChoiceParams::default());
        validate_group_defs(AUTH_CHOICE_GROUP_DEFS, &base)?;
    }

    let options = build_auth_choice_options(&params);
    debug!(options = options.len(), "Built auth choice options");

    if args.json {
        Ok(serde_json::to_string_pretty(&options)?)
    } else {
        Ok(render_options(renderer, &options))
    }
}

/// `onboard auth-hint`
pub fn auth_hint(config: &OnboardConfig, args: &AuthHintArgs) -> String {
    ExpiryHintFormatter::new(config.style_renderer.clone(), config.clock.clone())
        .with_defaults(HintOptions {
            allow_stale: config.flags.allow_stale_hints,
        })
        .format(args.expires_at)
}

/// `onboard patch-models`
pub fn patch_models(config: &OnboardConfig) -> PatchOutcome {
    let path = config.models_path.to_string_lossy();
    debug!(file = strip_path(&path), "Patching model table");
    patch_models_file(config.file_system.as_ref(), &config.models_path)
}

/// Styled one-line status for a patch outcome.
pub fn render_patch_outcome(renderer: &dyn StyleRenderer, outcome: &PatchOutcome) -> String {
    let token = match outcome {
        PatchOutcome::Patched { .. } => StyleToken::Success,
        PatchOutcome::Skipped => StyleToken::Muted,
        PatchOutcome::Failed { .. } => StyleToken::Warn,
    };
    renderer.colorize(renderer.is_rich(), token, &outcome.message())
}
