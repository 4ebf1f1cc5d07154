//! # Host Bridge Traits
//!
//! Capability traits that the onboarding core consumes but does not implement.
//!
//! ## Overview
//!
//! This crate defines the contract between the onboarding core and the host
//! that runs it. Each trait represents something the core needs from its
//! environment (styled output, the wall clock, the file system) without the
//! core reaching for process-wide globals. Desktop implementations live in
//! `bridge-desktop`; tests inject their own doubles.
//!
//! ## Traits
//!
//! ### Presentation
//! - [`StyleRenderer`](theme::StyleRenderer) - Rich-mode probe and themed colorizing
//!
//! ### Storage
//! - [`FileSystemAccess`](storage::FileSystemAccess) - Whole-file text reads and writes
//!
//! ### Utilities
//! - [`Clock`](time::Clock) - Time source for deterministic testing
//! - [`LogLevel`](time::LogLevel) - Verbosity shared by the CLI and the logging setup
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Host
//! implementations should convert platform errors into `BridgeError` and keep
//! the message actionable (include the path or capability involved).
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so handles can be shared behind
//! `Arc` by the configuration layer.
//!
//! ## Examples
//!
//! ### Implementing StyleRenderer
//!
//! ```
//! use bridge_traits::theme::{StyleRenderer, StyleToken};
//!
//! struct Brackets;
//!
//! impl StyleRenderer for Brackets {
//!     fn is_rich(&self) -> bool {
//!         true
//!     }
//!
//!     fn colorize(&self, rich: bool, token: StyleToken, text: &str) -> String {
//!         if rich {
//!             format!("[{}]{}", token.as_str(), text)
//!         } else {
//!             text.to_string()
//!         }
//!     }
//! }
//!
//! assert_eq!(Brackets.colorize(true, StyleToken::Warn, "hi"), "[warn]hi");
//! ```

pub mod error;
pub mod storage;
pub mod theme;
pub mod time;

pub use error::BridgeError;

// Re-export commonly used types
pub use storage::FileSystemAccess;
pub use theme::{wants_color, PlainStyleRenderer, StyleRenderer, StyleToken};
pub use time::{Clock, FixedClock, LogLevel, SystemClock};
