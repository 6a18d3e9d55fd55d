//! Print command - builds a tree from assignments and pretty-prints it.

use jsonnode::{PrettyPrint, PrintOptions};

use crate::{assign, cli::PrintArgs};

/// Run the print command
pub fn run(args: &PrintArgs, options: &PrintOptions) -> Result<(), Box<dyn std::error::Error>> {
    let tree = assign::build(&args.assignments);
    tracing::debug!(entries = tree.len(), "built tree");
    println!("{}", tree.pretty_with(options));
    Ok(())
}
