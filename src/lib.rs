//! Layered configuration loading for Rust services. Define a struct, declare
//! where each field can come from, and load.
//!
//! Layerfig fills a caller-owned configuration value from built-in defaults,
//! a config file (YAML, JSON or HCL), environment variables and command-line
//! flags, applied as an ordered pipeline of steps.
//!
//! ```ignore
//! let mut config = AppConfig::default();
//! layerfig::load(&mut config)?;
//! ```
//!
//! That single call fills declared defaults, applies `--flags` from the
//! process arguments, merges the config file the struct points at, and binds
//! declared environment variables, in that order.
//!
//! # Declaring fields
//!
//! A config type implements [`Settings`]: it is `Serialize`, `Deserialize`
//! and `Default`, and lists a [`Field`] for every value that can come from
//! somewhere other than a file:
//!
//! ```ignore
//! #[derive(Serialize, Deserialize, Default)]
//! struct AppConfig {
//!     log_level: String,
//!     server: ServerConfig,
//! }
//!
//! impl Settings for AppConfig {
//!     fn fields() -> Vec<Field> {
//!         vec![
//!             Field::new("log_level")
//!                 .default("debug")
//!                 .env("LOG_LEVEL")
//!                 .cli("log-level")
//!                 .short_cli("l"),
//!             Field::new("server.listen")
//!                 .default(":8080")
//!                 .env("SERVER_LISTEN")
//!                 .cli("listen"),
//!         ]
//!     }
//! }
//! ```
//!
//! The struct's serde representation is the document every step works on.
//! File keys are serde field names, and a field's registry path is its dotted
//! position in that document. There is no runtime reflection: the registry
//! is the whole contract.
//!
//! Every write rebuilds the value from that document, so state serde skips
//! (`#[serde(skip)]`, `skip_serializing`) comes back as `Default` unless
//! [`Settings::restore_skipped`] carries it over. A declared config path is
//! remembered from before the first step either way.
//!
//! # Pipeline
//!
//! ```text
//! Defaults              Field::default, only where the field is still zero
//!        ↓ then
//! Command-line flags    --key value, --key=value, -k value, -k
//!        ↓ then
//! Config file           Settings::config_file, .yml/.yaml/.json/.hcl
//!        ↓ then
//! Environment           Field::env
//! ```
//!
//! That is the default order. With [`Layerfig::builder()`] the caller picks
//! the steps and their order; a later step always overrides an earlier one
//! for the fields it touches:
//!
//! ```ignore
//! Layerfig::builder()
//!     .defaults()
//!     .file("config/app.yml")
//!     .env()
//!     .args()
//!     .load(&mut config)?;
//! ```
//!
//! Every layer is **sparse**. A config file only changes the keys it
//! contains; an unset or empty environment variable leaves the field alone;
//! a flag only touches fields declaring that key.
//!
//! The pipeline stops at the first failing step. Nothing is rolled back:
//! fields written by earlier steps keep their new values.
//!
//! # Flags
//!
//! [`tokenize`] turns arguments into a [`FlagMap`]. A flag without `=` takes
//! the next argument as its value unless that argument starts with a dash,
//! in which case it is a boolean flag set to `"true"`. Any argument without
//! a leading dash is an error. Negative numbers need the `=` spelling
//! (`--offset=-5`).
//!
//! Apps that already use clap can skip the tokenizer: the `cli` module
//! (behind the `clap` feature, on by default) converts `ArgMatches` into a
//! [`FlagMap`] for [`LayerfigBuilder::parsed_flags`].
//!
//! # Values
//!
//! Every source delivers strings. A string is coerced by looking at how the
//! field currently serializes: booleans, integers and floats are parsed,
//! strings pass through and are validated by the field's own deserializer
//! (so `humantime_serde` durations, socket addresses and enums just work),
//! and lists split on commas. A value that does not fit is an
//! [`LayerfigError::InvalidValue`] naming the flag or env var it came from.
//!
//! # Determinism
//!
//! Process arguments and environment are snapshots read when the pipeline
//! runs. Tests can inject both with
//! [`process_args()`](LayerfigBuilder::process_args) and
//! [`env_vars()`](LayerfigBuilder::env_vars), so no global state has to be
//! touched.
//!
//! # Strict mode
//!
//! Strict mode is **off by default**: config files may carry keys the struct
//! does not know. Turn it on with [`.strict(true)`](LayerfigBuilder::strict)
//! to fail with the offending dotted keys and the file path instead.
//!
//! # Error handling
//!
//! All fallible operations return [`LayerfigError`]. See the [`error`]
//! module for the full set.

pub mod error;
pub mod types;

mod bind;
mod builder;
#[cfg(feature = "clap")]
mod cli;
mod defaults;
mod env;
mod file;
mod flags;
pub(crate) mod merge;
mod validate;

#[cfg(test)]
mod fixtures;

pub use bind::bind;
pub use builder::{ArgSource, Layerfig, LayerfigBuilder, Step, load};
#[cfg(feature = "clap")]
pub use cli::flags_from_matches;
pub use error::{FormatError, LayerfigError};
pub use flags::tokenize;
pub use types::{Field, FileFormat, FlagMap, Settings};
