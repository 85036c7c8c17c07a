//! Error types for everything around the engine.
//!
//! The engine itself is total; these cover configuration, key scripts and
//! the clipboard.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown key {key:?} at offset {offset}")]
    UnknownKey { key: String, offset: usize },
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to access clipboard")]
    Access(#[source] arboard::Error),

    #[error("failed to copy to clipboard")]
    Write(#[source] arboard::Error),
}
