//! Diagnostics for the `creational` binary.
//!
//! The core and adapter crates only emit events; this module installs the
//! one subscriber that prints them. Everything goes to stderr so the demo
//! lines on stdout can be piped or compared byte for byte.
//!
//! `-q` keeps errors only, no flag keeps warnings, and each `-v` opens one
//! more level (info, debug, trace). A set `RUST_LOG` replaces the whole
//! computed filter.

use std::io::{self, IsTerminal as _};

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events pass the verbosity filter.
const LOG_TARGETS: [&str; 3] = ["creational", "creational_core", "creational_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(filter_directives(level_for(args)))?,
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `target=level` for each crate of the workspace, comma separated.
fn filter_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    LOG_TARGETS.map(|target| format!("{target}={level}")).join(",")
}
