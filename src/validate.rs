//! Strict-mode validation: detect unknown keys in config files.
//!
//! Uses `serde_ignored` while deserializing the merged document into the
//! target type and captures every key the type doesn't consume. Since the
//! document starts from the target's own serialization, anything ignored came
//! from the file.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::LayerfigError;

/// Deserialize `doc` into `C`, failing on keys `C` does not know.
///
/// Each unknown key is reported as a dotted path together with the file
/// that introduced it.
pub fn deserialize_strict<C: DeserializeOwned>(doc: Value, path: &Path) -> Result<C, LayerfigError> {
    let mut unknown_keys: Vec<String> = Vec::new();

    let config: C = serde_ignored::deserialize(doc, |ignored_path| {
        unknown_keys.push(ignored_path.to_string());
    })
    .map_err(|e| LayerfigError::InvalidValue {
        key: path.display().to_string(),
        reason: e.to_string(),
    })?;

    if unknown_keys.is_empty() {
        return Ok(config);
    }

    let errors = unknown_keys
        .into_iter()
        .map(|key| LayerfigError::UnknownKey {
            key,
            path: path.to_path_buf(),
        })
        .collect();

    Err(LayerfigError::UnknownKeys(errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind::to_document;
    use crate::fixtures::test::TestConfig;
    use crate::merge::deep_merge;
    use serde_json::json;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("/test/config.yml")
    }

    fn merged(overlay: Value) -> Value {
        let Value::Object(base) = to_document(&TestConfig::default()).unwrap() else {
            panic!("config must serialize to an object");
        };
        let Value::Object(overlay) = overlay else {
            panic!("overlay must be an object");
        };
        Value::Object(deep_merge(base, overlay))
    }

    #[test]
    fn valid_config_passes() {
        let doc = merged(json!({"log_level": "info", "server": {"http": {"listen": ":80"}}}));
        let config: TestConfig = deserialize_strict(doc, &path()).unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.server.http.listen, ":80");
    }

    #[test]
    fn unknown_top_level_key() {
        let doc = merged(json!({"log_level": "info", "typo_key": 42}));
        let err = deserialize_strict::<TestConfig>(doc, &path()).unwrap_err();
        match err {
            LayerfigError::UnknownKeys(keys) => {
                assert_eq!(keys.len(), 1);
                match &keys[0] {
                    LayerfigError::UnknownKey { key, path } => {
                        assert_eq!(key, "typo_key");
                        assert_eq!(path, &PathBuf::from("/test/config.yml"));
                    }
                    other => panic!("Expected UnknownKey, got: {other:?}"),
                }
            }
            other => panic!("Expected UnknownKeys, got: {other:?}"),
        }
    }

    #[test]
    fn unknown_nested_key() {
        let doc = merged(json!({"server": {"grpc": {"typo": "bad"}}}));
        let err = deserialize_strict::<TestConfig>(doc, &path()).unwrap_err();
        match err {
            LayerfigError::UnknownKeys(keys) => match &keys[0] {
                LayerfigError::UnknownKey { key, .. } => assert_eq!(key, "server.grpc.typo"),
                other => panic!("Expected UnknownKey, got: {other:?}"),
            },
            other => panic!("Expected UnknownKeys, got: {other:?}"),
        }
    }

    #[test]
    fn multiple_unknown_keys() {
        let doc = merged(json!({"typo1": 1, "typo2": 2}));
        let err = deserialize_strict::<TestConfig>(doc, &path()).unwrap_err();
        match err {
            LayerfigError::UnknownKeys(keys) => assert_eq!(keys.len(), 2),
            other => panic!("Expected UnknownKeys, got: {other:?}"),
        }
    }

    #[test]
    fn type_mismatch_is_invalid_value() {
        let doc = merged(json!({"server": {"http": {"read_timeout": "soon"}}}));
        let err = deserialize_strict::<TestConfig>(doc, &path()).unwrap_err();
        assert!(matches!(err, LayerfigError::InvalidValue { .. }));
    }
}
