use crate::bind;
use crate::error::LayerfigError;
use crate::types::Settings;

/// Assign declared defaults to every field that has no explicit value yet.
///
/// A field has no explicit value while it still equals its value in
/// `C::default()`. Fields already set by an earlier step keep their value.
/// A default that does not parse as the field's type is reported as
/// [`LayerfigError::InvalidValue`] keyed by the field path.
pub fn apply_defaults<C: Settings>(target: &mut C) -> Result<(), LayerfigError> {
    let zero = bind::to_document(&C::default())?;
    let current = bind::to_document(target)?;

    for field in C::fields() {
        let Some(default) = field.default else {
            continue;
        };
        if bind::get_path(&current, field.path) != bind::get_path(&zero, field.path) {
            continue;
        }
        bind::bind(target, field.path, field.path, default)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{ServiceConfig, TestConfig};
    use std::time::Duration;

    #[test]
    fn fills_zero_fields() {
        let mut config = TestConfig::default();
        apply_defaults(&mut config).unwrap();
        assert_eq!(config.service_name, "disk");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_addr, "");
        assert_eq!(config.server.http.listen, ":8080");
        assert_eq!(config.server.http.read_timeout, Duration::from_secs(120));
        assert_eq!(config.server.grpc.listen, "tcp://:8081");
        assert_eq!(config.server.grpc.timeout, Duration::from_secs(120));
    }

    #[test]
    fn keeps_explicit_values() {
        let mut config = TestConfig::default();
        config.log_level = "error".into();
        config.server.http.read_timeout = Duration::from_secs(5);
        apply_defaults(&mut config).unwrap();
        assert_eq!(config.log_level, "error");
        assert_eq!(config.server.http.read_timeout, Duration::from_secs(5));
        assert_eq!(config.service_name, "disk");
    }

    #[test]
    fn typed_defaults() {
        let mut config = ServiceConfig::default();
        apply_defaults(&mut config).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.ratio, 0.5);
        assert_eq!(config.tags, vec!["web", "api"]);
        assert_eq!(config.workers, None);
    }

    #[test]
    fn idempotent() {
        let mut once = TestConfig::default();
        apply_defaults(&mut once).unwrap();
        let mut twice = once.clone();
        apply_defaults(&mut twice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn unparsable_default_is_invalid_value() {
        use crate::types::Field;
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize, Debug, Default)]
        struct BadDefault {
            port: u16,
        }

        impl Settings for BadDefault {
            fn fields() -> Vec<Field> {
                vec![Field::new("port").default("not-a-port")]
            }
        }

        let err = apply_defaults(&mut BadDefault::default()).unwrap_err();
        assert!(matches!(err, LayerfigError::InvalidValue { ref key, .. } if key == "port"));
    }
}
