//! Command-line surface of `creational` (clap derive).
//!
//! Only argument shapes live here. Selectors parse straight into the core's
//! [`Family`] and [`Variant`], so a bad `--family` is rejected by clap with
//! the domain's own message.

use clap::{Args, Parser, Subcommand, ValueEnum};

use creational_core::domain::{Family, Variant};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Abstract Factory and Factory Method, side by side
#[derive(Debug, Parser)]
#[command(
    name = "creational",
    version,
    author,
    long_about = "Runs small demonstrations of the Abstract Factory and \
                  Factory Method creational patterns.",
    after_help = "EXAMPLES:\n  \
        creational abstract-factory\n  \
        creational af --family 2\n  \
        creational fm --creator 1 --output-format json\n  \
        creational list",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build products from one or more factory families
    #[command(visible_alias = "af")]
    AbstractFactory(AbstractFactoryArgs),

    /// Run the shared creator workflow with one or more creators
    #[command(visible_alias = "fm")]
    FactoryMethod(FactoryMethodArgs),

    /// Show the demos and their selectable variants
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Write a config file holding the defaults
    Init(InitArgs),

    /// Print a shell completion script
    Completions(CompletionsArgs),

    /// Read or change settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

impl Commands {
    /// `true` for commands that create the config file rather than read it.
    pub fn writes_config(&self) -> bool {
        matches!(self, Self::Init(_) | Self::Config(ConfigCommands::Set { .. }))
    }
}

#[derive(Debug, Args)]
pub struct AbstractFactoryArgs {
    /// Family to run (1 or 2); repeat or comma-separate for several, in order.
    /// Without it the `demo.families` setting is used
    #[arg(short, long = "family", value_name = "FAMILY", value_delimiter = ',')]
    pub families: Vec<Family>,
}

#[derive(Debug, Args)]
pub struct FactoryMethodArgs {
    /// Creator to run (1 or 2); repeat or comma-separate for several, in order.
    /// Without it the `demo.creators` setting is used
    #[arg(long = "creator", value_name = "CREATOR", value_delimiter = ',')]
    pub creators: Vec<Variant>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only this demo, e.g. `factory-method`
    #[arg(value_name = "ID")]
    pub id: Option<String>,

    #[arg(long, value_enum, default_value_t = ListFormat::Table)]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Id, description and variants
    Table,
    /// Ids only, one per line
    List,
    /// The whole catalog
    Json,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Replace an existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one setting, e.g. `demo.families`
    Get { key: String },
    /// Store one setting in the config file; lists are comma separated
    Set { key: String, value: String },
    /// Print every effective setting as TOML
    List,
    /// Print the config file location
    Path,
}
