//! Unchained - bundle and hook introspection
//!
//! Command line entry point: builds the app described by the unchained
//! config and prints what its bundles registered.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use unchained::app::AppFactory;
use unchained::cli::{Cli, Commands};
use unchained::commands;
use unchained::error::Result;

/// Log to stderr so tables on stdout stay clean; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let factory = AppFactory::new(cli.config, cli.env);

    match cli.command {
        Commands::Bundles => commands::bundles::run(&factory.create_app()?),
        Commands::Config(args) => commands::config::run(&factory.create_app()?, args),
        Commands::Extensions => commands::extensions::run(&factory.create_app()?),
        Commands::Hooks(args) => commands::hooks::run(&factory, args),
        Commands::Services => commands::services::run(&factory.create_app()?),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
