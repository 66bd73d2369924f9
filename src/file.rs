//! Config file loading.
//!
//! A file is read in full, decoded by its extension into a generic document,
//! and deep-merged onto the target's current document. Keys absent from the
//! file keep their value, so a file can be as sparse as it likes.
//!
//! HCL goes through one extra pass. Its decoder yields plain maps for
//! attributes but may yield lists for blocks, so the decoded tree is
//! re-serialized to JSON and every block list sitting where the target
//! expects a single struct is collapsed into one object before merging.
//! The target's document is the shape: an `Option<Struct>` that is still
//! `None` serializes as `null`, so blocks aimed at it stay a list.

use std::path::Path;

use serde_json::Value;

use crate::bind;
use crate::error::{FormatError, LayerfigError};
use crate::merge::{collapse_blocks, deep_merge};
use crate::types::{FileFormat, Settings};
use crate::validate;

/// Load the file at `path` onto `target`.
///
/// The file is read before its extension is checked, so a missing file is
/// always an [`IoError`](LayerfigError::IoError). With `strict`, keys that
/// match no field of `C` fail with [`LayerfigError::UnknownKeys`].
pub fn apply_file<C: Settings>(target: &mut C, path: &Path, strict: bool) -> Result<(), LayerfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| LayerfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let format = FileFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), ?format, "loading config file");

    let overlay = parse(&content, format).map_err(|e| LayerfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let doc = bind::to_document(target)?;
    let overlay = match format {
        FileFormat::Hcl => collapse_blocks(overlay, &doc),
        FileFormat::Yaml | FileFormat::Json => overlay,
    };

    let overlay = match overlay {
        Value::Object(obj) => obj,
        Value::Null => return Ok(()),
        other => {
            return Err(LayerfigError::InvalidValue {
                key: path.display().to_string(),
                reason: format!("expected a mapping at the top level, got {other}"),
            });
        }
    };
    let Value::Object(base) = doc else {
        return Err(LayerfigError::KeyNotFound("<root>".into()));
    };

    let merged = Value::Object(deep_merge(base, overlay));
    let updated = if strict {
        validate::deserialize_strict(merged, path)?
    } else {
        bind::from_document(merged, &path.display().to_string())?
    };
    let previous = std::mem::replace(target, updated);
    target.restore_skipped(previous);
    Ok(())
}

/// Decode file content into a generic document.
pub fn parse(content: &str, format: FileFormat) -> Result<Value, FormatError> {
    match format {
        FileFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        FileFormat::Json => Ok(serde_json::from_str(content)?),
        FileFormat::Hcl => {
            let body: hcl::Value = hcl::from_str(content)?;
            Ok(serde_json::to_value(body)?)
        }
    }
}
