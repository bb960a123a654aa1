//! `creational list` — show the available demos.

use creational_core::{
    domain::{PATTERN_REGISTRY, PatternDef, find_pattern},
    error::DemoError,
};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let defs = select(args.id.as_deref())?;

    match args.format {
        ListFormat::Table => {
            output.header("Available Demos:")?;
            for def in &defs {
                output.print(&format!("  {:<18} {}", def.id.as_str(), def.description))?;
                output.print(&format!("  {:<18} variants: {}", "", def.variants.join(", ")))?;
            }
        }
        ListFormat::List => {
            for def in &defs {
                output.print(def.id.as_str())?;
            }
        }
        ListFormat::Json => {
            output.json(&defs)?;
        }
    }

    Ok(())
}

/// The whole catalog, or the single entry named by `id`.
fn select(id: Option<&str>) -> CliResult<Vec<&'static PatternDef>> {
    match id {
        Some(id) => Ok(vec![find_pattern(id).map_err(DemoError::from)?]),
        None => Ok(PATTERN_REGISTRY.iter().collect()),
    }
}
