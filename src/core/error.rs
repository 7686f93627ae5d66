use thiserror::Error;

#[derive(Error, Debug)]
pub enum PilotError {
    #[error("match start not observed after {attempts} polls")]
    StartTimeout { attempts: u32 },

    #[error("invalid round identifier: {0}")]
    InvalidRound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PilotError>;
