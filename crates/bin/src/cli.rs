//! CLI argument definitions for the jsonnode binary.

use clap::{Parser, Subcommand};
use jsonnode::PathBuf;

use crate::assign::Assignment;

/// Build and query JSON-shaped trees from path assignments
#[derive(Parser, Debug)]
#[command(name = "jsonnode")]
#[command(about = "jsonnode: build, query and project trees from path=value assignments")]
#[command(version)]
pub struct Cli {
    /// Spaces per indentation level in printed output
    #[arg(
        long,
        global = true,
        default_value_t = jsonnode::pretty::DEFAULT_INDENT,
        env = "JSONNODE_INDENT"
    )]
    pub indent: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree and pretty-print it
    Print(PrintArgs),
    /// Print the node found at a path
    Get(GetArgs),
    /// Print only the values found at the given paths
    Extract(ExtractArgs),
}

/// Arguments for the print command
#[derive(clap::Args, Debug)]
pub struct PrintArgs {
    /// Assignments of the form `a.b.c=value`, applied in order
    #[arg(value_parser = Assignment::parse)]
    pub assignments: Vec<Assignment>,
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dot-separated path to look up
    #[arg(value_parser = parse_path)]
    pub path: PathBuf,

    /// Assignments of the form `a.b.c=value`, applied in order
    #[arg(value_parser = Assignment::parse)]
    pub assignments: Vec<Assignment>,
}

/// Arguments for the extract command
#[derive(clap::Args, Debug)]
pub struct ExtractArgs {
    /// Dot-separated path to keep; may be repeated
    #[arg(short, long = "path", value_parser = parse_path, required = true)]
    pub paths: Vec<PathBuf>,

    /// Assignments of the form `a.b.c=value`, applied in order
    #[arg(value_parser = Assignment::parse)]
    pub assignments: Vec<Assignment>,
}

fn parse_path(text: &str) -> Result<PathBuf, String> {
    let path = crate::assign::parse_path(text);
    if path.is_empty() {
        return Err(format!("`{text}` has no path segments"));
    }
    Ok(path)
}
