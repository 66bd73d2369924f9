//! Configuration structs for the layerfig demo application.
//!
//! The root [`DemoConfig`] nests [`ServerConfig`] and [`DisplayConfig`] to
//! show that registry paths, file sections and env vars all reach nested
//! fields.
//!
//! # Sources per field
//!
//! | Field                    | Default       | Env var                 | Flag                |
//! |--------------------------|---------------|-------------------------|---------------------|
//! | `config`                 |               | `DEMO_CONFIG`           | `--config`, `-c`    |
//! | `name`                   | `layerfig-demo` | `DEMO_NAME`           |                     |
//! | `verbose`                |               | `DEMO_VERBOSE`          | `--verbose`, `-v`   |
//! | `server.host`            | `127.0.0.1`   | `DEMO_SERVER_HOST`      | `--host`            |
//! | `server.port`            | `3000`        | `DEMO_SERVER_PORT`      | `--port`, `-p`      |
//! | `server.read_timeout`    | `30s`         | `DEMO_READ_TIMEOUT`     |                     |
//! | `display.color`          | `yellow`      | `DEMO_DISPLAY_COLOR`    | `--color`           |
//! | `display.tags`           | `demo`        | `DEMO_DISPLAY_TAGS`     |                     |

use std::path::PathBuf;
use std::time::Duration;

use layerfig::{Field, Settings};
use serde::{Deserialize, Serialize};

/// Root configuration for the demo application.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DemoConfig {
    /// Config file to merge, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<PathBuf>,

    /// Application name shown in the banner.
    pub name: String,

    /// Enable verbose output.
    pub verbose: bool,

    pub server: ServerConfig,

    pub display: DisplayConfig,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(with = "humantime_serde")]
    pub read_timeout: Duration,
}

/// Display and output formatting configuration.
///
/// `color` is used by the banner via ANSI codes.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DisplayConfig {
    pub color: String,
    pub tags: Vec<String>,
}

impl Settings for DemoConfig {
    fn fields() -> Vec<Field> {
        vec![
            Field::new("config").env("DEMO_CONFIG").cli("config").short_cli("c"),
            Field::new("name").default("layerfig-demo").env("DEMO_NAME"),
            Field::new("verbose").env("DEMO_VERBOSE").cli("verbose").short_cli("v"),
            Field::new("server.host")
                .default("127.0.0.1")
                .env("DEMO_SERVER_HOST")
                .cli("host"),
            Field::new("server.port")
                .default("3000")
                .env("DEMO_SERVER_PORT")
                .cli("port")
                .short_cli("p"),
            Field::new("server.read_timeout")
                .default("30s")
                .env("DEMO_READ_TIMEOUT"),
            Field::new("display.color")
                .default("yellow")
                .env("DEMO_DISPLAY_COLOR")
                .cli("color"),
            Field::new("display.tags").default("demo").env("DEMO_DISPLAY_TAGS"),
        ]
    }

    fn config_file(&self) -> Option<PathBuf> {
        self.config.clone()
    }
}
