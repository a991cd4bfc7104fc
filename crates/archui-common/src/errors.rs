use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config missing field: {0}")]
    MissingField(String),
}

/// Errors raised while folding streamed chunks into a history.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("history is empty; seed it with an entry before streaming")]
    EmptyHistory,

    #[error("chunk has no choices")]
    NoChoices,

    #[error("chunk decode error: {0}")]
    Decode(String),

    #[error("stream read error: {0}")]
    Read(String),
}

/// Errors raised while unwrapping the gateway state envelope.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("invalid response metadata: {0}")]
    InvalidMetadata(String),

    #[error("arch state decode error: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ArchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
