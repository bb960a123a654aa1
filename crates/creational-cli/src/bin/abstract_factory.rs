//! Stand-alone Abstract Factory demo: a readiness line, then the first
//! factory. `creational abstract-factory` runs every family.

use std::process::ExitCode;

use creational_adapters::StdoutConsole;
use creational_core::prelude::*;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> DemoResult<()> {
    let console = StdoutConsole::stdout();
    console.write_line("OK")?;
    DemoService::new(Box::new(console)).abstract_factory(&[Family::One])?;
    Ok(())
}
