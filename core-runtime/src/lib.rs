//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the onboarding core:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the CLI and the other core
//! crates depend on. It owns the `tracing` subscriber setup and the
//! configuration builder that wires host bridges (style renderer, clock,
//! file system) into a single [`OnboardConfig`](config::OnboardConfig).

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
