//! Everything the CLI itself prints on stdout.
//!
//! Demo lines go through the `Console` port; this type handles the extras
//! around them (headers, status marks, JSON) and decides which of them are
//! shown for the resolved [`OutputFormat`].

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// Resolve flags against config.
    ///
    /// An explicit `--output-format` beats `output.format`, and whatever is
    /// still `Auto` becomes Human on a terminal and Plain in a pipe.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto => OutputFormat::from_config(&config.output.format),
            chosen => chosen,
        };
        let format = match format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            resolved => resolved,
        };

        Self {
            format,
            quiet: args.quiet,
            color: !(args.no_color || config.output.no_color),
            term: Term::stdout(),
        }
    }

    fn emit(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(line)
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(msg)
    }

    /// `✓ msg`, green when colour is on.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.color {
            self.emit(&format!("{} {}", "✓".green().bold(), msg.green()))
        } else {
            self.emit(&format!("✓ {msg}"))
        }
    }

    /// Section title. Dropped unless the format is Human, so Plain output
    /// stays identical to the stand-alone demo binaries.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }
        if self.color {
            self.emit(&text.cyan().bold().to_string())
        } else {
            self.emit(text)
        }
    }

    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.emit(&text)
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Resolved format; never `Auto`.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}
