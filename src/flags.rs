//! Command-line flag tokenizer.
//!
//! Turns a flat argument list into a [`FlagMap`]. Accepted spellings:
//!
//! ```text
//! -v                  {"v": "true"}
//! -v 1                {"v": "1"}
//! --log-level debug   {"log-level": "debug"}
//! --http-listen=a:b   {"http-listen": "a:b"}
//! ```
//!
//! A flag without `=` takes the next argument as its value unless that
//! argument starts with `-`, in which case the flag is boolean and gets
//! `"true"`. This means a negative number can only be passed with the `=`
//! spelling: `--offset=-5`. `--offset -5` reads `-5` as a second flag.

use crate::bind;
use crate::error::LayerfigError;
use crate::types::{FlagMap, Settings};

/// Tokenize `args` (program name excluded) into a flag map.
///
/// Repeated keys resolve to the last occurrence. Any argument without a
/// leading dash fails the whole call.
pub fn tokenize<I, S>(args: I) -> Result<FlagMap, LayerfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut flags = FlagMap::new();
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        let token = match arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) {
            Some(token) => token,
            None => return Err(LayerfigError::InvalidFlag(arg.to_string())),
        };

        let (key, value) = match token.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => {
                let value = match args.next_if(|next| !next.as_ref().starts_with('-')) {
                    Some(next) => next.as_ref().to_string(),
                    None => "true".to_string(),
                };
                (token.to_string(), value)
            }
        };
        flags.insert(key, value);
    }

    Ok(flags)
}

/// Bind flags to every field declaring a matching `cli` or `short_cli` key.
///
/// The long key is looked up first; the short key only when the long key is
/// absent. Flags that match no field are ignored.
pub fn apply_flags<C: Settings>(target: &mut C, flags: &FlagMap) -> Result<(), LayerfigError> {
    if flags.is_empty() {
        tracing::debug!("no command-line flags to apply");
        return Ok(());
    }

    for field in C::fields() {
        let matched = [field.cli, field.short_cli]
            .into_iter()
            .flatten()
            .find_map(|key| flags.get(key).map(|value| (key, value)));
        if let Some((key, value)) = matched {
            bind::bind(target, field.path, key, value)?;
        }
    }
    Ok(())
}
