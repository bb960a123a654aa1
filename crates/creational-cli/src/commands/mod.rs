//! Command handlers. One module per subcommand.

pub mod abstract_factory;
pub mod completions;
pub mod config;
pub mod factory_method;
pub mod init;
pub mod list;

use creational_adapters::{MemoryConsole, StdoutConsole};
use creational_core::{
    application::{Console, DemoService},
    domain::Transcript,
    error::DemoResult,
};
use tracing::debug;

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

/// Run one demo against the console the output settings call for.
///
/// Lines stream straight to stdout unless the transcript is wanted as JSON
/// or output is suppressed, in which case they are captured in memory.
fn run_demo<F>(output: &OutputManager, demo: F) -> CliResult<Transcript>
where
    F: FnOnce(&DemoService) -> DemoResult<Transcript>,
{
    let json = output.format() == OutputFormat::Json;
    let console: Box<dyn Console> = if json || output.is_quiet() {
        Box::new(MemoryConsole::new())
    } else {
        Box::new(StdoutConsole::stdout())
    };

    let service = DemoService::new(console);
    let transcript = demo(&service)?;
    debug!(pattern = %transcript.pattern, lines = transcript.len(), "Demo rendered");

    if json {
        output.json(&transcript)?;
    }
    Ok(transcript)
}
