//! ANSI Style Renderer
//!
//! Renders [`StyleToken`]s as 24-bit foreground colors. Rich mode is decided
//! once at construction by [`wants_color`] against stdout.

use bridge_traits::theme::{wants_color, StyleRenderer, StyleToken};
use std::io::{self, IsTerminal};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Invalid hex color '{0}': expected #RRGGBB")]
    InvalidHex(String),
}

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, PaletteError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidHex(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| PaletteError::InvalidHex(hex.to_string()))
        };

        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Colors for each style slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub accent: Rgb,
    pub info: Rgb,
    pub muted: Rgb,
    pub success: Rgb,
    pub warn: Rgb,
    pub error: Rgb,
}

impl Palette {
    pub fn color(&self, token: StyleToken) -> Rgb {
        match token {
            StyleToken::Accent => self.accent,
            StyleToken::Info => self.info,
            StyleToken::Muted => self.muted,
            StyleToken::Success => self.success,
            StyleToken::Warn => self.warn,
            StyleToken::Error => self.error,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Rgb(0xFF, 0x5A, 0x2D),
            info: Rgb(0xFF, 0x8A, 0x5B),
            muted: Rgb(0x8B, 0x7F, 0x77),
            success: Rgb(0x2F, 0xBF, 0x71),
            warn: Rgb(0xFF, 0xB0, 0x20),
            error: Rgb(0xE2, 0x3D, 0x2D),
        }
    }
}

/// Truecolor ANSI renderer
pub struct AnsiStyleRenderer {
    palette: Palette,
    rich: bool,
}

impl AnsiStyleRenderer {
    /// Probe the process environment and stdout to decide on rich mode.
    pub fn detect() -> Self {
        let rich = wants_color(|key| std::env::var(key).ok(), io::stdout().is_terminal());
        debug!(rich, "Detected terminal styling capability");
        Self::with_rich(rich)
    }

    /// Renderer with rich mode pinned.
    pub fn with_rich(rich: bool) -> Self {
        Self {
            palette: Palette::default(),
            rich,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for AnsiStyleRenderer {
    fn default() -> Self {
        Self::detect()
    }
}

impl StyleRenderer for AnsiStyleRenderer {
    fn is_rich(&self) -> bool {
        self.rich
    }

    fn colorize(&self, rich: bool, token: StyleToken, text: &str) -> String {
        if !rich {
            return text.to_string();
        }
        let Rgb(r, g, b) = self.palette.color(token);
        format!("\x1b[38;2;{};{};{}m{}\x1b[39m", r, g, b, text)
    }
}
