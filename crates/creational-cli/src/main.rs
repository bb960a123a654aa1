//! `creational`: run the Abstract Factory and Factory Method demos.
//!
//! Exit codes:
//!
//! | Code | When                                         |
//! |------|----------------------------------------------|
//! |  0   | demo or command finished                     |
//! |  1   | console or filesystem failure                |
//! |  2   | bad arguments, selector, key or refused init |
//! |  3   | unknown pattern                              |
//! |  4   | configuration could not be loaded or saved   |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Optional; real environment variables win anyway.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version arrive here as well and are not failures.
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }
    debug!(command = ?cli.command, "Arguments parsed");

    // init and `config set` may be pointed at a file they are about to create.
    let must_exist = !cli.command.writes_config();
    let config = match AppConfig::load(cli.global.config.as_ref(), must_exist) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;

    match run(cli, config, output) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => report(&e, verbose),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let Cli { global, command } = cli;
    match command {
        Commands::AbstractFactory(args) => commands::abstract_factory::execute(args, config, output),
        Commands::FactoryMethod(args) => commands::factory_method::execute(args, config, output),
        Commands::List(args) => commands::list::execute(args, output),
        Commands::Init(args) => commands::init::execute(args, global, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, global, config, output),
    }
}

/// Print `err` on stderr, coloured only when stderr is a terminal.
fn report(err: &CliError, verbose: bool) -> ExitCode {
    err.log();
    let text = if std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{text}");
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn clap_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn version_and_author_come_from_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
        assert!(cmd.get_author().is_some());
    }
}
