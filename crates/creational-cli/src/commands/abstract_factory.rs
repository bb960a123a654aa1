//! `creational abstract-factory` — run the Abstract Factory demo.

use tracing::instrument;

use crate::{cli::AbstractFactoryArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Run the client code with each selected factory.
///
/// Families given on the command line replace the configured list.
#[instrument(skip_all)]
pub fn execute(
    args: AbstractFactoryArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let families = if args.families.is_empty() {
        config.demo.families
    } else {
        args.families
    };

    output.header("Abstract Factory")?;
    super::run_demo(&output, |service| service.abstract_factory(&families))?;
    Ok(())
}
