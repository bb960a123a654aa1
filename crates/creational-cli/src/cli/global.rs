//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// More diagnostics on stderr: -v info, -vv product creation, -vvv every line written
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing on stdout, not even demo lines; errors still go to stderr
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes (also set by a non-empty NO_COLOR)
    #[arg(long, global = true, env = "NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user config file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How demo output is rendered
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise
    #[default]
    Auto,
    /// Headers and colour around the demo lines
    Human,
    /// Demo lines only, byte-identical to the stand-alone binaries
    Plain,
    /// The transcript as a JSON object
    Json,
}

impl OutputFormat {
    /// Map the `output.format` setting. Anything unrecognised means `Auto`.
    pub fn from_config(value: &str) -> Self {
        Self::from_str(value, true).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_values_map_case_insensitively() {
        assert_eq!(OutputFormat::from_config("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config("plain"), OutputFormat::Plain);
        assert_eq!(OutputFormat::from_config("fancy"), OutputFormat::Auto);
    }
}
