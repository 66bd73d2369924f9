//! Public types shared by the loading pipeline.
//!
//! A configuration type opts into loading by implementing [`Settings`]. The
//! trait ties three things together:
//!
//! - the **document shape**, given by the type's serde representation. JSON
//!   and YAML keys are the serde field names, so `#[serde(rename = ...)]`
//!   controls them;
//! - the **field registry**, a list of [`Field`] entries that attach declared
//!   keys (default, env var, CLI flags) to dotted document paths;
//! - the **zero value**, given by [`Default`]. A field "has no explicit value"
//!   while it still equals its value in `Self::default()`.
//!
//! ```ignore
//! impl Settings for AppConfig {
//!     fn fields() -> Vec<Field> {
//!         vec![
//!             Field::new("log_level")
//!                 .default("debug")
//!                 .env("LOG_LEVEL")
//!                 .cli("log-level")
//!                 .short_cli("l"),
//!             Field::new("server.http.listen")
//!                 .default(":8080")
//!                 .env("SERVER_HTTP_LISTEN")
//!                 .cli("http-listen"),
//!         ]
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::LayerfigError;

/// Flag key to raw value, as produced by [`tokenize`](crate::tokenize).
pub type FlagMap = HashMap<String, String>;

/// A configuration type that can be populated by the pipeline.
///
/// Every write goes through the value's serde document: the target is
/// serialized, the field is replaced, and a new value is deserialized in its
/// place. State serde does not round-trip (`#[serde(skip)]`,
/// `#[serde(skip_serializing)]`) comes back as `Default` unless
/// [`restore_skipped`](Self::restore_skipped) carries it over:
///
/// ```ignore
/// #[derive(Serialize, Deserialize, Default)]
/// struct AppConfig {
///     #[serde(skip)]
///     config_path: PathBuf,
///     log_level: String,
/// }
///
/// impl Settings for AppConfig {
///     fn fields() -> Vec<Field> {
///         vec![Field::new("log_level").default("info")]
///     }
///
///     fn config_file(&self) -> Option<PathBuf> {
///         Some(self.config_path.clone())
///     }
///
///     fn restore_skipped(&mut self, previous: Self) {
///         self.config_path = previous.config_path;
///     }
/// }
/// ```
pub trait Settings: Serialize + DeserializeOwned + Default {
    /// The field registry: every field that takes values from defaults,
    /// environment variables or command-line flags.
    ///
    /// Fields only ever set from config files need no entry.
    fn fields() -> Vec<Field>;

    /// Path of the config file this value points at, if any.
    ///
    /// Used by the file step when no explicit path was given. `None` or an
    /// empty path makes the step a no-op.
    fn config_file(&self) -> Option<PathBuf> {
        None
    }

    /// Move state serde skips from `previous` into the freshly rebuilt
    /// `self`. Called after every write. The default keeps nothing.
    fn restore_skipped(&mut self, _previous: Self) {}
}

/// Declared keys for one configuration field.
///
/// `path` is the dotted path of the field in the serialized document, e.g.
/// `"server.http.listen"` for `config.server.http.listen`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub path: &'static str,
    pub default: Option<&'static str>,
    pub env: Option<&'static str>,
    pub cli: Option<&'static str>,
    pub short_cli: Option<&'static str>,
}

impl Field {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            default: None,
            env: None,
            cli: None,
            short_cli: None,
        }
    }

    /// Textual default, applied by the defaults step.
    pub const fn default(self, value: &'static str) -> Self {
        Self {
            default: Some(value),
            ..self
        }
    }

    /// Environment variable read by the env step.
    pub const fn env(self, name: &'static str) -> Self {
        Self {
            env: Some(name),
            ..self
        }
    }

    /// Long flag name, without dashes.
    pub const fn cli(self, key: &'static str) -> Self {
        Self {
            cli: Some(key),
            ..self
        }
    }

    /// Short flag name, without dashes. Consulted only when the long flag is absent.
    pub const fn short_cli(self, key: &'static str) -> Self {
        Self {
            short_cli: Some(key),
            ..self
        }
    }
}

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
    Hcl,
}

impl FileFormat {
    /// Pick the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, LayerfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Ok(FileFormat::Yaml),
            "json" => Ok(FileFormat::Json),
            "hcl" => Ok(FileFormat::Hcl),
            _ => Err(LayerfigError::UnsupportedExtension {
                path: path.to_path_buf(),
                ext,
            }),
        }
    }
}
