//! Extract command - keeps only the values at the requested paths.

use jsonnode::{PrettyPrint, PrintOptions};

use crate::{assign, cli::ExtractArgs};

/// Run the extract command
pub fn run(args: &ExtractArgs, options: &PrintOptions) -> Result<(), Box<dyn std::error::Error>> {
    let tree = assign::build(&args.assignments);
    let view = tree.extract(&args.paths);
    tracing::debug!(
        requested = args.paths.len(),
        kept = view.len(),
        "extracted view"
    );
    println!("{}", view.pretty_with(options));
    Ok(())
}
