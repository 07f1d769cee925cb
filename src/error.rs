// SPDX-License-Identifier: MPL-2.0
//! Error type shared by the configuration, feed, and localization loaders.
//!
//! The notification components themselves never fail: every input degrades to
//! a visual fallback. Only the code that touches the filesystem reports errors.

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A notification feed file could not be parsed.
    #[error("Feed Error: {0}")]
    Feed(String),

    /// A bundled translation file is malformed.
    #[error("Locale Error: {0}")]
    Locale(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
