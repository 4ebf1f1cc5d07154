use serde::{Deserialize, Serialize};
use std::fmt;

/// Upstream providers that can be selected during onboarding.
///
/// # Examples
///
/// ```
/// use core_auth::ProviderKind;
///
/// let provider = ProviderKind::Xai;
/// assert_eq!(provider.display_name(), "xAI");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// xAI (Grok models)
    Xai,
}

impl ProviderKind {
    /// Get the human-readable display name for this provider
    pub const fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Xai => "xAI",
        }
    }

    /// Get the provider identifier string
    ///
    /// Used as the group value in option menus and in logs.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_auth::ProviderKind;
    ///
    /// assert_eq!(ProviderKind::Xai.as_str(), "xai");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Xai => "xai",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A single selectable authentication method.
///
/// `value` is the stable identifier the prompt returns; `label` and `hint`
/// are display text. Options are built fresh for every call and never
/// mutated afterwards.
///
/// # Examples
///
/// ```
/// use core_auth::AuthChoiceOption;
///
/// let option = AuthChoiceOption::new("skip", "Skip for now");
/// assert!(option.hint.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthChoiceOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl AuthChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Static description of a provider group.
///
/// `choices` lists option values in display order. Values with no matching
/// option are dropped when the group is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthChoiceGroupDef {
    pub value: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub choices: &'static [&'static str],
}

/// A provider group with its options resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthChoiceGroup {
    pub value: String,
    pub label: String,
    pub hint: String,
    pub options: Vec<AuthChoiceOption>,
}

impl AuthChoiceGroup {
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Caller-supplied options for building the choice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthChoiceParams {
    /// Append a trailing "Skip for now" option
    pub include_skip: bool,
}

impl AuthChoiceParams {
    pub fn with_skip() -> Self {
        Self { include_skip: true }
    }
}

/// Grouped view of the auth choices.
///
/// The skip option is never placed inside a group; the prompt renders it
/// after all groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthChoiceGroups {
    pub groups: Vec<AuthChoiceGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_option: Option<AuthChoiceOption>,
}
