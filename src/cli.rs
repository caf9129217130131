use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::record::Direction;

#[derive(Debug, Parser)]
#[command(author, version, about = "Map records between entity shapes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Project JSON records onto entities in one direction
    Map(MapArgs),
    /// Rename the attributes of the first record through the forward dictionary
    Attributes(AttributesArgs),
    /// Rename request attributes through the request dictionary
    Request(RequestArgs),
    /// Print the mapped name of a single attribute
    Lookup(LookupArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
#[value(rename_all = "kebab-case")]
pub enum DirectionArg {
    #[default]
    FirstToSecond,
    SecondToFirst,
}

impl From<DirectionArg> for Direction {
    fn from(value: DirectionArg) -> Self {
        match value {
            DirectionArg::FirstToSecond => Direction::FirstToSecond,
            DirectionArg::SecondToFirst => Direction::SecondToFirst,
        }
    }
}

#[derive(Debug, Args)]
pub struct MapArgs {
    /// Mapper configuration (YAML, or JSON with a .json extension)
    #[arg(short, long)]
    pub config: PathBuf,
    /// JSON input holding one record or a list of records (`-` for stdin)
    #[arg(short, long)]
    pub input: PathBuf,
    /// Projection direction
    #[arg(short, long, value_enum, default_value_t = DirectionArg::FirstToSecond)]
    pub direction: DirectionArg,
    /// Symbolic name of the target entity (defaults to the first one configured)
    #[arg(short, long)]
    pub entity: Option<String>,
    /// Output JSON file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Emit compact JSON instead of pretty-printed output
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Args)]
pub struct AttributesArgs {
    /// Mapper configuration (YAML, or JSON with a .json extension)
    #[arg(short, long)]
    pub config: PathBuf,
    /// JSON input holding one record or a list of records (`-` for stdin)
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output JSON file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Emit compact JSON instead of pretty-printed output
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Args)]
pub struct RequestArgs {
    /// Mapper configuration (YAML, or JSON with a .json extension)
    #[arg(short, long)]
    pub config: PathBuf,
    /// JSON object with the request data (`-` for stdin)
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output JSON file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Emit compact JSON instead of pretty-printed output
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Mapper configuration (YAML, or JSON with a .json extension)
    #[arg(short, long)]
    pub config: PathBuf,
    /// Dictionary to consult
    #[arg(short, long, value_enum, default_value_t = DirectionArg::FirstToSecond)]
    pub direction: DirectionArg,
    /// Attribute name to look up
    pub attribute: String,
}
