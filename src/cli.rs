//! Clap adapter for layerfig.
//!
//! This module is the optional bridge between an app that already parses its
//! command line with [clap](https://docs.rs/clap) and layerfig's arguments
//! step. It is compiled only when the `clap` Cargo feature is enabled (on by
//! default).
//!
//! [`flags_from_matches`] collects the values the user actually typed and
//! keys them the same way the built-in tokenizer would, so the result can be
//! handed to [`LayerfigBuilder::parsed_flags`](crate::LayerfigBuilder::parsed_flags)
//! and matched against the `cli`/`short_cli` keys of the field registry.
//!
//! ```ignore
//! let command = Cli::command();
//! let matches = command.clone().get_matches();
//! Layerfig::builder()
//!     .defaults()
//!     .parsed_flags(layerfig::flags_from_matches(&command, &matches))
//!     .env()
//!     .load(&mut config)?;
//! ```

use clap::parser::ValueSource;
use clap::{ArgMatches, Command};

use crate::types::FlagMap;

/// Build a [`FlagMap`] from clap matches.
///
/// Only arguments given on the command line are included; values that come
/// from clap defaults or clap's own env fallback are skipped, leaving those
/// layers to layerfig. Each entry is keyed by the argument's long name, else
/// its short name, else its id. For repeated arguments the last value wins.
pub fn flags_from_matches(command: &Command, matches: &ArgMatches) -> FlagMap {
    let mut flags = FlagMap::new();

    for arg in command.get_arguments() {
        let id = arg.get_id().as_str();
        if matches.value_source(id) != Some(ValueSource::CommandLine) {
            continue;
        }
        let Ok(Some(raw)) = matches.try_get_raw(id) else {
            continue;
        };
        let Some(value) = raw.last() else {
            continue;
        };

        let key = match (arg.get_long(), arg.get_short()) {
            (Some(long), _) => long.to_string(),
            (None, Some(short)) => short.to_string(),
            (None, None) => id.to_string(),
        };
        flags.insert(key, value.to_string_lossy().into_owned());
    }

    flags
}
