use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("unknown scoring policy: {0}")]
    UnknownPolicy(String),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, IndexError>;
