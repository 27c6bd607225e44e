//! Analogue Harness - analogue regression tests for USB audio firmware
//!
//! Command line entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod exit_codes;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(
        version = analogue_harness::VERSION,
        build_date = analogue_harness::BUILD_DATE,
        "analogue-harness starting"
    );

    let config = commands::load_config(cli.config.as_deref());
    let result = match cli.command {
        Command::List(args) => commands::list::execute(args),
        Command::Resolve(args) => commands::resolve::execute(args, config),
        Command::Devices => commands::devices::execute(),
        Command::Verify(args) => commands::verify::execute(args),
        Command::Run(args) => commands::run::execute(args, config),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            exit_codes::EXECUTION_ERROR
        }
    };
    std::process::exit(code);
}

/// Log to stderr so stdout stays machine readable; `RUST_LOG` wins over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,analogue_harness={level},analogue_harness_core={level}"
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
