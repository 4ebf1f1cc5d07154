use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Auth group '{group}' references unknown choice '{choice}'")]
    UnknownChoice { group: String, choice: String },

    #[error("Duplicate auth choice value: {0}")]
    DuplicateChoice(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
