//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! This crate provides implementations of the bridge traits the onboarding
//! core needs when it runs inside a terminal:
//! - `StyleRenderer` using 24-bit ANSI escape sequences
//! - `FileSystemAccess` using `std::fs`
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{AnsiStyleRenderer, StdFileSystem};
//! use bridge_traits::{StyleRenderer, StyleToken};
//!
//! let renderer = AnsiStyleRenderer::detect();
//! let rich = renderer.is_rich();
//! println!("{}", renderer.colorize(rich, StyleToken::Success, "ready"));
//!
//! let fs = StdFileSystem::current_dir()?;
//! ```

mod filesystem;
mod theme;

pub use filesystem::StdFileSystem;
pub use theme::{AnsiStyleRenderer, Palette, PaletteError, Rgb};
