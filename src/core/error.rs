use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid action id: {0}")]
    InvalidAction(i64),

    #[error("Advisory collaborator is not configured")]
    AdvisoryUnavailable,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
