use clap::Parser;
use jsonnode::PrintOptions;
use tracing_subscriber::EnvFilter;

mod assign;
mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; stdout is reserved for printed trees
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("jsonnode=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = PrintOptions::default().with_indent(cli.indent);

    match &cli.command {
        Commands::Print(args) => commands::print::run(args, &options),
        Commands::Get(args) => commands::get::run(args, &options),
        Commands::Extract(args) => commands::extract::run(args, &options),
    }
}
