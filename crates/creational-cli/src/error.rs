//! Errors surfaced by the `creational` binary.
//!
//! Every failure ends up as a [`CliError`], which knows its exit code, the
//! hints to print under it and how to render itself on stderr.

use std::error::Error as StdError;
use std::fmt::Write as _;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use creational_core::error::{DemoError, ErrorCategory as CoreCategory};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The config file could not be read, parsed or written, or a value
    /// handed to `config set` was rejected.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    #[error("Unknown config key '{key}'")]
    UnknownConfigKey { key: String },

    /// `init` found a file and `--force` was not given.
    #[error("Configuration already exists at {path}")]
    ConfigExists { path: PathBuf },

    #[error("Demo failed: {0}")]
    Core(#[from] DemoError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

/// Broad class of a [`CliError`]; decides the exit code and log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad selector, bad key, refused overwrite.
    UserError,
    NotFound,
    Configuration,
    /// Console or filesystem failure, or a bug.
    Internal,
}

impl ErrorCategory {
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::Internal => Self::Internal,
        }
    }
}

impl CliError {
    /// Hints printed under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Problem: {message}"),
                "Inspect the file shown by 'creational config path'".into(),
                "Run 'creational init --force' to start again from the defaults".into(),
            ],
            Self::UnknownConfigKey { key } => {
                let mut hints = vec![
                    format!("'{key}' is not a configuration key"),
                    "Known keys:".into(),
                ];
                hints.extend(
                    [
                        ("demo.families", "e.g. 1,2"),
                        ("demo.creators", "e.g. 2"),
                        ("output.no_color", "true | false"),
                        ("output.format", "auto | human | plain | json"),
                    ]
                    .iter()
                    .map(|(key, example)| format!("  • {key:<15} - {example}")),
                );
                hints
            }
            Self::ConfigExists { path } => vec![
                format!("'{}' was left untouched", path.display()),
                "Pass --force to replace it with the defaults".into(),
            ],
            Self::Core(err) => err.suggestions(),
            Self::IoError { message, .. } => vec![
                format!("The operating system reported: {message}"),
                "Check that the target path is writable".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownConfigKey { .. } | Self::ConfigExists { .. } => ErrorCategory::UserError,
            Self::Core(err) => err.category().into(),
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Chain of underlying causes, nearest first.
    fn causes(&self) -> impl Iterator<Item = &(dyn StdError + 'static)> {
        std::iter::successors(self.source(), |&err| err.source())
    }

    /// Render for a terminal: coloured headline, causes when `verbose`.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = format!(
            "\n{} {}\n\n  {}\n",
            "✗".red().bold(),
            "Error:".red().bold(),
            self.to_string().red()
        );
        if verbose {
            for cause in self.causes() {
                let _ = write!(out, "\n  {} {}\n", "→".dimmed(), cause.to_string().dimmed());
            }
        }
        self.push_suggestions(&mut out, &"Suggestions:".yellow().bold().to_string());
        if !verbose {
            let _ = write!(
                out,
                "\n{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed()
            );
        }
        out
    }

    /// Render without ANSI codes, for pipes and log files.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {}\n", self);
        if verbose {
            for cause in self.causes() {
                let _ = writeln!(out, "  Caused by: {cause}");
            }
        }
        self.push_suggestions(&mut out, "Suggestions:");
        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }
        out
    }

    fn push_suggestions(&self, out: &mut String, title: &str) {
        let hints = self.suggestions();
        if hints.is_empty() {
            return;
        }
        let _ = writeln!(out, "\n{title}");
        for hint in hints {
            let _ = writeln!(out, "  {hint}");
        }
    }

    /// Emit one tracing event; user mistakes log as warnings.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, exit_code = category.exit_code(), "{}", self);
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, exit_code = category.exit_code(), "{}", self);
            }
        }
        for cause in self.causes() {
            tracing::debug!("caused by: {cause}");
        }
    }
}
