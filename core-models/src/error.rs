use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelsError {
    #[error("Models file not found: {0}")]
    NotFound(String),

    #[error("Models path is a directory: {0}")]
    NotAFile(String),

    #[error("Bridge error: {0}")]
    Bridge(#[from] bridge_traits::error::BridgeError),
}

pub type Result<T> = std::result::Result<T, ModelsError>;
