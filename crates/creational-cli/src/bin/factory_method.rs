//! Stand-alone Factory Method demo: both creators, no arguments.

use std::process::ExitCode;

use creational_adapters::StdoutConsole;
use creational_core::prelude::*;

fn main() -> ExitCode {
    let service = DemoService::new(Box::new(StdoutConsole::stdout()));
    match service.factory_method(&Variant::ALL) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
