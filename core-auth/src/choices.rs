//! Auth choice option and group builders.
//!
//! The flat list and the grouped view are both derived from
//! [`build_auth_choice_options`]. Groups join the static
//! [`AUTH_CHOICE_GROUP_DEFS`] table against that list by option value.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{AuthError, Result};
use crate::types::{
    AuthChoiceGroup, AuthChoiceGroupDef, AuthChoiceGroups, AuthChoiceOption, AuthChoiceParams,
    ProviderKind,
};

pub const XAI_API_KEY_CHOICE: &str = "xai-api-key";
pub const SKIP_CHOICE: &str = "skip";

const SKIP_LABEL: &str = "Skip for now";

/// Provider groups, in display order.
pub const AUTH_CHOICE_GROUP_DEFS: &[AuthChoiceGroupDef] = &[AuthChoiceGroupDef {
    value: ProviderKind::Xai.as_str(),
    label: ProviderKind::Xai.display_name(),
    hint: "Grok API key",
    choices: &[XAI_API_KEY_CHOICE],
}];

/// The trailing "Skip for now" option.
pub fn skip_option() -> AuthChoiceOption {
    AuthChoiceOption::new(SKIP_CHOICE, SKIP_LABEL)
}

/// Build the flat, ordered list of auth options.
///
/// The primary credential option always comes first; `skip` is appended last
/// when `params.include_skip` is set.
///
/// # Examples
///
/// ```
/// use core_auth::{build_auth_choice_options, AuthChoiceParams};
///
/// let options = build_auth_choice_options(&AuthChoiceParams::with_skip());
/// assert_eq!(options.first().unwrap().value, "xai-api-key");
/// assert_eq!(options.last().unwrap().value, "skip");
/// ```
pub fn build_auth_choice_options(params: &AuthChoiceParams) -> Vec<AuthChoiceOption> {
    let mut options = vec![AuthChoiceOption::new(XAI_API_KEY_CHOICE, "xAI Grok API key")
        .with_hint("Get your key at console.x.ai")];

    if params.include_skip {
        options.push(skip_option());
    }

    options
}

/// Resolve each group's `choices` against `options`.
///
/// Order follows `choices`; values with no matching option are dropped, so a
/// group may come back empty. When two options share a value the later one
/// wins.
pub fn resolve_groups(
    defs: &[AuthChoiceGroupDef],
    options: &[AuthChoiceOption],
) -> Vec<AuthChoiceGroup> {
    let by_value: HashMap<&str, &AuthChoiceOption> = options
        .iter()
        .map(|option| (option.value.as_str(), option))
        .collect();

    defs.iter()
        .map(|def| {
            let resolved: Vec<AuthChoiceOption> = def
                .choices
                .iter()
                .filter_map(|choice| by_value.get(choice).map(|option| (*option).clone()))
                .collect();

            if resolved.len() < def.choices.len() {
                debug!(
                    group = def.value,
                    dropped = def.choices.len() - resolved.len(),
                    "Dropped auth choices with no matching option"
                );
            }

            AuthChoiceGroup {
                value: def.value.to_string(),
                label: def.label.to_string(),
                hint: def.hint.to_string(),
                options: resolved,
            }
        })
        .collect()
}

/// Build the grouped view of the auth choices.
///
/// The skip option is returned separately and never appears inside a group.
///
/// # Examples
///
/// ```
/// use core_auth::{build_auth_choice_groups, AuthChoiceParams};
///
/// let grouped = build_auth_choice_groups(&AuthChoiceParams::with_skip());
/// assert_eq!(grouped.groups.len(), 1);
/// assert_eq!(grouped.skip_option.unwrap().label, "Skip for now");
/// ```
pub fn build_auth_choice_groups(params: &AuthChoiceParams) -> AuthChoiceGroups {
    let options = build_auth_choice_options(&AuthChoiceParams {
        include_skip: false,
        ..*params
    });

    let groups = resolve_groups(AUTH_CHOICE_GROUP_DEFS, &options);
    let skip_option = params.include_skip.then(skip_option);

    AuthChoiceGroups {
        groups,
        skip_option,
    }
}

/// Check that option values are unique and every group choice resolves.
///
/// Returns the first problem found, in table order.
pub fn validate_group_defs(
    defs: &[AuthChoiceGroupDef],
    options: &[AuthChoiceOption],
) -> Result<()> {
    let mut seen = HashSet::new();
    for option in options {
        if !seen.insert(option.value.as_str()) {
            return Err(AuthError::DuplicateChoice(option.value.clone()));
        }
    }

    for def in defs {
        if let Some(missing) = def.choices.iter().find(|choice| !seen.contains(**choice)) {
            return Err(AuthError::UnknownChoice {
                group: def.value.to_string(),
                choice: missing.to_string(),
            });
        }
    }

    Ok(())
}

/// Like [`build_auth_choice_groups`], but fails instead of dropping choices
/// that reference no option.
pub fn build_auth_choice_groups_strict(params: &AuthChoiceParams) -> Result<AuthChoiceGroups> {
    let options = build_auth_choice_options(&AuthChoiceParams {
        include_skip: false,
        ..*params
    });
    validate_group_defs(AUTH_CHOICE_GROUP_DEFS, &options)?;
    Ok(build_auth_choice_groups(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_DEFS: &[AuthChoiceGroupDef] = &[
        AuthChoiceGroupDef {
            value: "mixed",
            label: "Mixed",
            hint: "some known",
            choices: &["b", "ghost", "a"],
        },
        AuthChoiceGroupDef {
            value: "empty",
            label: "Empty",
            hint: "none known",
            choices: &["ghost"],
        },
    ];

    fn sample_options() -> Vec<AuthChoiceOption> {
        vec![
            AuthChoiceOption::new("a", "A"),
            AuthChoiceOption::new("b", "B"),
        ]
    }

    #[test]
    fn test_options_without_skip() {
        let options = build_auth_choice_options(&AuthChoiceParams::default());
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "xai-api-key");
        assert_eq!(options[0].label, "xAI Grok API key");
        assert_eq!(options[0].hint.as_deref(), Some("Get your key at console.x.ai"));
        assert!(options.iter().all(|o| o.value != SKIP_CHOICE));
    }

    #[test]
    fn test_options_with_skip_last() {
        let options = build_auth_choice_options(&AuthChoiceParams::with_skip());
        assert_eq!(options.len(), 2);
        let last = options.last().unwrap();
        assert_eq!(last.value, "skip");
        assert_eq!(last.label, "Skip for now");
        assert!(last.hint.is_none());
    }

    #[test]
    fn test_resolve_preserves_choice_order_and_drops_unknown() {
        let groups = resolve_groups(TEST_DEFS, &sample_options());
        assert_eq!(groups.len(), 2);

        let values: Vec<&str> = groups[0].options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["b", "a"]);
        assert!(groups[0].options.len() <= TEST_DEFS[0].choices.len());
    }

    #[test]
    fn test_resolve_tolerates_zero_matches() {
        let groups = resolve_groups(TEST_DEFS, &sample_options());
        assert!(groups[1].is_empty());
        assert_eq!(groups[1].label, "Empty");
    }

    #[test]
    fn test_resolve_last_duplicate_wins() {
        let options = vec![
            AuthChoiceOption::new("a", "First"),
            AuthChoiceOption::new("a", "Second"),
        ];
        let defs = [AuthChoiceGroupDef {
            value: "g",
            label: "G",
            hint: "",
            choices: &["a"],
        }];
        let groups = resolve_groups(&defs, &options);
        assert_eq!(groups[0].options[0].label, "Second");
    }

    #[test]
    fn test_groups_match_static_table() {
        let grouped = build_auth_choice_groups(&AuthChoiceParams::default());
        assert_eq!(grouped.groups.len(), AUTH_CHOICE_GROUP_DEFS.len());

        let xai = &grouped.groups[0];
        assert_eq!(xai.value, "xai");
        assert_eq!(xai.label, "xAI");
        assert_eq!(xai.hint, "Grok API key");
        assert_eq!(xai.options.len(), 1);
        assert_eq!(xai.options[0].value, XAI_API_KEY_CHOICE);
        assert!(grouped.skip_option.is_none());
    }

    #[test]
    fn test_groups_keep_skip_outside() {
        let grouped = build_auth_choice_groups(&AuthChoiceParams::with_skip());
        assert_eq!(grouped.skip_option, Some(skip_option()));
        for group in &grouped.groups {
            assert!(group.options.iter().all(|o| o.value != SKIP_CHOICE));
        }
    }

    #[test]
    fn test_static_table_references_only_known_options() {
        let options = build_auth_choice_options(&AuthChoiceParams::default());
        assert_eq!(validate_group_defs(AUTH_CHOICE_GROUP_DEFS, &options), Ok(()));
    }

    #[test]
    fn test_validate_reports_unknown_choice() {
        let err = validate_group_defs(TEST_DEFS, &sample_options()).unwrap_err();
        assert_eq!(
            err,
            AuthError::UnknownChoice {
                group: "mixed".to_string(),
                choice: "ghost".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_reports_duplicate_value() {
        let options = vec![AuthChoiceOption::new("a", "A"), AuthChoiceOption::new("a", "A2")];
        let err = validate_group_defs(&[], &options).unwrap_err();
        assert_eq!(err, AuthError::DuplicateChoice("a".to_string()));
    }

    #[test]
    fn test_strict_matches_lenient_for_static_table() {
        let params = AuthChoiceParams::with_skip();
        assert_eq!(
            build_auth_choice_groups_strict(&params).unwrap(),
            build_auth_choice_groups(&params)
        );
    }
}
