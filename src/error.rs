use std::io;
use thiserror::Error;

/// Raised by the checked constructor of a singleton whose cell is already full.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingletonError {
    #[error("Singleton instance already exists. Use getInstance() method.")]
    AlreadyExists,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    #[error("unknown car factory '{0}' (expected 'mastodon' or 'rhino')")]
    UnknownKind(String),
}

/// Errors while loading the demo configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
