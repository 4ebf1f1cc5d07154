//! Theme and Styled Output Abstractions
//!
//! The core never decides on its own whether the output target can display
//! colors. It asks a [`StyleRenderer`] once per formatting call and hands the
//! answer back when colorizing, so the same renderer can be probed and then
//! overridden (for example by a `--plain` flag) without touching global state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic style slot in the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleToken {
    /// Brand highlight
    Accent,
    /// Informational, secondary emphasis
    Info,
    /// De-emphasized text
    Muted,
    /// Positive state
    Success,
    /// Needs attention soon
    Warn,
    /// Failure state
    Error,
}

impl StyleToken {
    /// All tokens, in palette order.
    pub const ALL: [StyleToken; 6] = [
        StyleToken::Accent,
        StyleToken::Info,
        StyleToken::Muted,
        StyleToken::Success,
        StyleToken::Warn,
        StyleToken::Error,
    ];

    /// Stable identifier used in theme files and logs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bridge_traits::StyleToken;
    ///
    /// assert_eq!(StyleToken::Muted.as_str(), "muted");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleToken::Accent => "accent",
            StyleToken::Info => "info",
            StyleToken::Muted => "muted",
            StyleToken::Success => "success",
            StyleToken::Warn => "warn",
            StyleToken::Error => "error",
        }
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Styled text renderer trait
///
/// Implementations map a [`StyleToken`] to whatever the host can display:
/// - **Desktop terminals**: 24-bit ANSI escape sequences
/// - **Pipes / CI logs**: plain text
/// - **Tests**: recognisable markers or mocks
///
/// # Contract
///
/// - `is_rich` reports whether the output target supports styled text.
/// - `colorize` must return `text` unchanged when `rich` is `false`.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::theme::{StyleRenderer, StyleToken};
///
/// fn status(renderer: &dyn StyleRenderer) -> String {
///     let rich = renderer.is_rich();
///     renderer.colorize(rich, StyleToken::Success, "ready")
/// }
/// ```
pub trait StyleRenderer: Send + Sync {
    /// Whether the output target can display styled text
    fn is_rich(&self) -> bool;

    /// Apply the theme style for `token` to `text` when `rich` is set
    fn colorize(&self, rich: bool, token: StyleToken, text: &str) -> String;
}

/// Decide whether an output stream should receive styled text.
///
/// `env` looks up process environment variables. `NO_COLOR` (any value)
/// always wins, `FORCE_COLOR` other than `0` enables styling without a
/// terminal, and `TERM=dumb` disables it. Otherwise the stream must be a
/// terminal.
///
/// # Examples
///
/// ```
/// use bridge_traits::theme::wants_color;
///
/// assert!(!wants_color(|key| (key == "NO_COLOR").then(String::new), true));
/// assert!(wants_color(|_| None, true));
/// ```
pub fn wants_color<F>(env: F, is_terminal: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if env("NO_COLOR").is_some() {
        return false;
    }
    if let Some(force) = env("FORCE_COLOR") {
        return force.trim() != "0";
    }
    if env("TERM").as_deref() == Some("dumb") {
        return false;
    }
    is_terminal
}

/// Renderer that never emits styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyleRenderer;

impl StyleRenderer for PlainStyleRenderer {
    fn is_rich(&self) -> bool {
        false
    }

    fn colorize(&self, _rich: bool, _token: StyleToken, text: &str) -> String {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_no_color_wins_over_force_color() {
        let env = env_of(&[("NO_COLOR", ""), ("FORCE_COLOR", "1")]);
        assert!(!wants_color(env, true));
    }

    #[test]
    fn test_force_color_enables_without_tty() {
        assert!(wants_color(env_of(&[("FORCE_COLOR", "1")]), false));
        assert!(!wants_color(env_of(&[("FORCE_COLOR", "0")]), true));
    }

    #[test]
    fn test_dumb_terminal_is_plain() {
        assert!(!wants_color(env_of(&[("TERM", "dumb")]), true));
        assert!(wants_color(env_of(&[("TERM", "xterm-256color")]), true));
        assert!(!wants_color(env_of(&[]), false));
    }

    #[test]
    fn test_token_identifier_matches_serde_name() {
        for token in StyleToken::ALL {
            let json = serde_json::to_string(&token).unwrap();
            assert_eq!(json, format!("\"{}\"", token.as_str()));
        }
    }

    #[test]
    fn test_token_display_matches_identifier() {
        assert_eq!(StyleToken::Success.to_string(), "success");
        assert_eq!(format!("{}", StyleToken::Warn), "warn");
    }

    #[test]
    fn test_plain_renderer_ignores_rich_flag() {
        let renderer = PlainStyleRenderer;
        assert!(!renderer.is_rich());
        assert_eq!(renderer.colorize(true, StyleToken::Error, "boom"), "boom");
        assert_eq!(renderer.colorize(false, StyleToken::Error, "boom"), "boom");
    }
}
