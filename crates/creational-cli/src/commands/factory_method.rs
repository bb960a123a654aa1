//! `creational factory-method` — run the Factory Method demo.

use tracing::instrument;

use crate::{cli::FactoryMethodArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Run the shared creator workflow with each selected creator.
#[instrument(skip_all)]
pub fn execute(
    args: FactoryMethodArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let creators = if args.creators.is_empty() {
        config.demo.creators
    } else {
        args.creators
    };

    output.header("Factory Method")?;
    super::run_demo(&output, |service| service.factory_method(&creators))?;
    Ok(())
}
