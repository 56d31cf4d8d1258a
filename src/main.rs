use clap::Parser;
use std::process;
use values_lint::{cli::Cli, config, run_command};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> values_lint::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = config::load_config(cli.config.as_deref())?;

    run_command(cli.resolved_command(), cli.no_color, &config)
}
