//! a11ylens - Inspect HTML documents for common accessibility defects
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use a11ylens::cli::{self, Cli, Commands};
use a11ylens::exit_codes;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    let config = cli.config.as_deref();

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Scan(args) => cli::commands::scan::execute(args, config).await,
        Commands::Report(args) => cli::commands::report::execute(args, config).await,
        Commands::Serve(args) => cli::commands::serve::execute(args, config).await,
        Commands::Init(args) => cli::commands::init::execute(args).await,
    };

    // Handle exit codes for CI integration
    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout is reserved for reports and transport responses
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
