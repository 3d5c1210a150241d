use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mrec",
    about = "Layer JSON and TOML documents and query them by dotted path",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override a value after merging (PATH=VALUE, VALUE parsed as JSON
    /// when possible). Repeatable.
    #[arg(long = "set", global = true, value_name = "PATH=VALUE")]
    pub overrides: Vec<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge documents left to right and print the result
    Merge(MergeArgs),
    /// Print the value at a dotted path of the merged document
    Get(GetArgs),
    /// List the public top-level keys of the merged document
    Keys(KeysArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct GetArgs {
    pub path: String,
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Value printed when the path is missing
    #[arg(long)]
    pub default: Option<String>,
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct KeysArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}
