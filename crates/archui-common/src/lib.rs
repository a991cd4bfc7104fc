pub mod errors;

pub use errors::{ArchError, ConfigError, StateError, StreamError};

pub type Result<T> = std::result::Result<T, ArchError>;
