//! Get command - prints the node at a path, failing when it is absent.

use jsonnode::{PrettyPrint, PrintOptions};

use crate::{assign, cli::GetArgs};

/// Run the get command
pub fn run(args: &GetArgs, options: &PrintOptions) -> Result<(), Box<dyn std::error::Error>> {
    let tree = assign::build(&args.assignments);

    match tree.get_node(&args.path) {
        Some(node) => {
            println!("{}", node.pretty_with(options));
            Ok(())
        }
        None => {
            eprintln!("not found: {}", args.path);
            std::process::exit(1);
        }
    }
}
