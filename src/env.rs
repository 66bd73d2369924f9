use std::collections::HashMap;

use crate::bind;
use crate::error::LayerfigError;
use crate::types::Settings;

/// Snapshot of environment variables, keyed by name.
pub type EnvVars = HashMap<String, String>;

/// Snapshot the process environment.
///
/// Names or values that are not valid UTF-8 are converted lossily.
pub fn process_env() -> EnvVars {
    std::env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect()
}

/// Bind every field that declares an env var present in `vars`.
///
/// Unset or empty variables leave the field at its current value. Values
/// that do not parse as the field's type fail with
/// [`LayerfigError::InvalidValue`] naming the variable.
///
/// Takes a snapshot so tests can pass synthetic data instead of the process
/// environment.
pub fn apply_env<C: Settings>(target: &mut C, vars: &EnvVars) -> Result<(), LayerfigError> {
    for field in C::fields() {
        let Some(name) = field.env else {
            continue;
        };
        match vars.get(name) {
            Some(value) if !value.is_empty() => bind::bind(target, field.path, name, value)?,
            _ => {}
        }
    }
    Ok(())
}
