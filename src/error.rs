use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayerfigError {
    #[error("invalid flag: {0}")]
    InvalidFlag(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Unsupported config extension '{ext}' for {path}")]
    UnsupportedExtension { path: PathBuf, ext: String },

    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ParseError { path: PathBuf, source: FormatError },

    #[error("Unknown key '{key}' in {path}")]
    UnknownKey { key: String, path: PathBuf },

    #[error("Unknown keys in config file")]
    UnknownKeys(Vec<LayerfigError>),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Configuration is not representable as a document: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Decoder failure for one of the supported file formats.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Hcl(#[from] hcl::Error),
}
