//! Errors raised while assembling the onboarding runtime.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The configuration builder was given unusable input
    #[error("Invalid onboarding configuration: {0}")]
    Config(String),

    /// The log level, format or filter could not be applied
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// No host implementation was supplied for a bridge trait
    #[error("No {capability} available: {message}")]
    CapabilityMissing { capability: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
