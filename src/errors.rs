// src/errors.rs

//! Crate-wide error kinds and a `Result` alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UvconfError {
    #[error("unsupported file type {extension:?} for {path:?}: use .toml, .yaml, .yml or .json")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("invalid value for `{field}`: {reason} (got {value})")]
    Validation {
        field: String,
        reason: String,
        value: String,
    },

    #[error("unknown configuration field `{0}`")]
    UnknownField(String),

    #[error("no [tool.uv] section found in document")]
    MissingSection,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UvconfError {
    /// Build a validation error for `field`, formatting the offending raw
    /// value into the message.
    pub fn validation(
        field: impl Into<String>,
        reason: impl Into<String>,
        value: &serde_json::Value,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
            value: value.to_string(),
        }
    }
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, UvconfError>;
