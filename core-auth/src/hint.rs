//! Token freshness hints.
//!
//! A hint is a short, styled status line describing how long a stored
//! credential stays valid. The decision table lives in [`describe_expiry`];
//! [`format_oauth_hint`] applies the theme through the injected renderer.
//!
//! | Condition                         | Style     | Text                               |
//! |-----------------------------------|-----------|------------------------------------|
//! | no expiry (absent or `0`)         | muted     | `token unavailable`                |
//! | expired, stale allowed            | warn      | `token present · refresh on use`   |
//! | expired                           | error     | `token expired`                    |
//! | ≤ 10 minutes left                 | warn      | `token ok · expires in {duration}` |
//! | otherwise                         | success   | `token ok · expires in {duration}` |

use std::sync::Arc;

use bridge_traits::{Clock, StyleRenderer, StyleToken};
use serde::Serialize;
use tracing::debug;

const MINUTE_MS: f64 = 60_000.0;
const WARN_THRESHOLD_MINUTES: i64 = 10;

/// Options for hint rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HintOptions {
    /// Treat an expired token as refreshable instead of expired
    pub allow_stale: bool,
}

impl HintOptions {
    pub fn allow_stale() -> Self {
        Self { allow_stale: true }
    }
}

/// Classified state of a credential's expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExpiryStatus {
    /// No expiry recorded
    Unavailable,
    /// Expired, but the caller will refresh on use
    Stale,
    /// Expired
    Expired,
    /// Valid for roughly `minutes` more
    Valid { minutes: i64 },
}

/// An unstyled hint: which theme slot to use and what to say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryHint {
    #[serde(flatten)]
    pub status: ExpiryStatus,
    pub style: StyleToken,
    pub text: String,
}

impl ExpiryHint {
    fn new(status: ExpiryStatus, style: StyleToken, text: impl Into<String>) -> Self {
        Self {
            status,
            style,
            text: text.into(),
        }
    }

    /// Render through `renderer` with the given rich-mode flag.
    pub fn render(&self, renderer: &dyn StyleRenderer, rich: bool) -> String {
        renderer.colorize(rich, self.style, &self.text)
    }
}

/// Round half away from zero, as the hint arithmetic expects.
fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}

/// Human duration for a positive minute count: `3h`, `1h`, `42m`.
///
/// Never renders `0m`.
pub fn format_duration(minutes: i64) -> String {
    if minutes >= 120 {
        format!("{}h", round_half_away(minutes as f64 / 60.0))
    } else if minutes >= 60 {
        "1h".to_string()
    } else {
        format!("{}m", minutes.max(1))
    }
}

/// Classify an expiry timestamp against `now_ms`.
///
/// Both timestamps are Unix epoch milliseconds. `Some(0)` is treated the same
/// as `None`.
///
/// # Examples
///
/// ```
/// use bridge_traits::StyleToken;
/// use core_auth::{describe_expiry, HintOptions};
///
/// let now = 1_700_000_000_000;
/// let hint = describe_expiry(Some(now + 90 * 60 * 1000), now, HintOptions::default());
/// assert_eq!(hint.text, "token ok · expires in 1h");
/// assert_eq!(hint.style, StyleToken::Success);
/// ```
pub fn describe_expiry(expires_at_ms: Option<i64>, now_ms: i64, opts: HintOptions) -> ExpiryHint {
    let expires = match expires_at_ms {
        Some(expires) if expires != 0 => expires,
        _ => {
            return ExpiryHint::new(
                ExpiryStatus::Unavailable,
                StyleToken::Muted,
                "token unavailable",
            )
        }
    };

    let remaining = expires.saturating_sub(now_ms);
    if remaining <= 0 {
        if opts.allow_stale {
            return ExpiryHint::new(
                ExpiryStatus::Stale,
                StyleToken::Warn,
                "token present · refresh on use",
            );
        }
        return ExpiryHint::new(ExpiryStatus::Expired, StyleToken::Error, "token expired");
    }

    let minutes = round_half_away(remaining as f64 / MINUTE_MS);
    let label = format!("token ok · expires in {}", format_duration(minutes));
    let style = if minutes <= WARN_THRESHOLD_MINUTES {
        StyleToken::Warn
    } else {
        StyleToken::Success
    };

    ExpiryHint::new(ExpiryStatus::Valid { minutes }, style, label)
}

/// Render a styled token freshness hint.
///
/// Reads the clock once and probes `renderer.is_rich()` once per call.
pub fn format_oauth_hint(
    expires_at_ms: Option<i64>,
    opts: HintOptions,
    renderer: &dyn StyleRenderer,
    clock: &dyn Clock,
) -> String {
    let rich = renderer.is_rich();
    let hint = describe_expiry(expires_at_ms, clock.unix_timestamp_millis(), opts);
    debug!(status = ?hint.status, style = %hint.style, rich, "Formatted token hint");
    hint.render(renderer, rich)
}

/// Hint formatter bound to a renderer and a clock.
///
/// Convenient for callers holding shared bridge handles from the runtime
/// configuration.
#[derive(Clone)]
pub struct ExpiryHintFormatter {
    renderer: Arc<dyn StyleRenderer>,
    clock: Arc<dyn Clock>,
    defaults: HintOptions,
}

impl ExpiryHintFormatter {
    pub fn new(renderer: Arc<dyn StyleRenderer>, clock: Arc<dyn Clock>) -> Self {
        Self {
            renderer,
            clock,
            defaults: HintOptions::default(),
        }
    }

    /// Options used by [`format`](Self::format).
    pub fn with_defaults(mut self, defaults: HintOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn format(&self, expires_at_ms: Option<i64>) -> String {
        self.format_with(expires_at_ms, self.defaults)
    }

    pub fn format_with(&self, expires_at_ms: Option<i64>, opts: HintOptions) -> String {
        format_oauth_hint(expires_at_ms, opts, self.renderer.as_ref(), self.clock.as_ref())
    }

    /// Unstyled classification at the current time.
    pub fn describe(&self, expires_at_ms: Option<i64>) -> ExpiryHint {
        describe_expiry(expires_at_ms, self.clock.unix_timestamp_millis(), self.defaults)
    }
}
