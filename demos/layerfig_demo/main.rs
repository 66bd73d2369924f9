//! # layerfig demo application
//!
//! A sample CLI tool that shows how to wire
//! [layerfig](https://docs.rs/layerfig) into an app that parses its command
//! line with clap. It exists to demonstrate and manually verify layerfig's
//! features.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example layerfig_demo
//! cargo run --example layerfig_demo -- --port 8080 -v
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature              | How to exercise it                                                        |
//! |----------------------|---------------------------------------------------------------------------|
//! | Declared defaults    | `cargo run --example layerfig_demo`                                       |
//! | Config file          | `cargo run --example layerfig_demo -- --config demo.yml`                  |
//! | Env var override     | `DEMO_DISPLAY_COLOR=red cargo run --example layerfig_demo`                |
//! | Nested env var       | `DEMO_SERVER_PORT=9999 cargo run --example layerfig_demo`                 |
//! | List from env        | `DEMO_DISPLAY_TAGS=a,b,c cargo run --example layerfig_demo`               |
//! | CLI override         | `cargo run --example layerfig_demo -- --host 0.0.0.0 -p 8080`             |
//! | Strict file keys     | `cargo run --example layerfig_demo -- --strict --config demo.yml`         |
//! | Built-in tokenizer   | `cargo run --example layerfig_demo -- --raw --port=9000`                  |

mod config;

use clap::{CommandFactory, FromArgMatches, Parser};

use layerfig::{Layerfig, LayerfigError};

use config::DemoConfig;

/// layerfig demo, a sample CLI app for showcasing layered config loading.
#[derive(Parser, Debug)]
#[command(name = "layerfig-demo")]
struct Cli {
    /// Config file (.yml, .yaml, .json or .hcl).
    #[arg(long, short)]
    config: Option<String>,

    /// Enable verbose output.
    #[arg(long, short)]
    verbose: bool,

    /// Override the server host.
    #[arg(long)]
    host: Option<String>,

    /// Override the server port.
    #[arg(long, short)]
    port: Option<u16>,

    /// Override the banner color (red, green, yellow, blue, magenta, cyan).
    #[arg(long)]
    color: Option<String>,

    /// Reject config file keys the struct does not know.
    #[arg(long)]
    strict: bool,

    /// Skip clap and let layerfig tokenize the process arguments itself.
    #[arg(long)]
    raw: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), LayerfigError> {
    let command = Cli::command();
    let matches = command.clone().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let mut config = DemoConfig::default();
    let builder = Layerfig::builder().strict(cli.strict).defaults();
    let builder = if cli.raw {
        // --raw and --strict are not fields; drop them before tokenizing
        builder.custom_args(
            std::env::args()
                .skip(1)
                .filter(|arg| arg != "--raw" && arg != "--strict"),
        )
    } else {
        builder.parsed_flags(layerfig::flags_from_matches(&command, &matches))
    };
    builder.declared_file().env().load(&mut config)?;

    print_banner(&config);
    Ok(())
}

fn print_banner(config: &DemoConfig) {
    let code = match config.display.color.as_str() {
        "red" => "31",
        "green" => "32",
        "yellow" => "33",
        "blue" => "34",
        "magenta" => "35",
        "cyan" => "36",
        _ => "37",
    };
    println!("\x1b[{code}m{}\x1b[0m", config.name);
    println!(
        "listening on {}:{} (read timeout {:?})",
        config.server.host, config.server.port, config.server.read_timeout
    );
    println!("tags: {}", config.display.tags.join(", "));

    if config.verbose {
        if let Some(path) = &config.config {
            println!("config file: {}", path.display());
        }
        println!("{config:#?}");
    }
}
