//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Env, UNCHAINED_CONFIG_FILE};

/// Unchained - bundle and hook introspection
///
/// Build the app described by an unchained config and list what its bundles registered.
#[derive(Parser, Debug)]
#[command(
    name = "unchained",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Inspect the bundles, hooks and registries of an unchained app",
    long_about = "Unchained assembles an app from bundles listed in unchained.yaml by running \
                  each bundle's hooks, then lists the bundles, config options, extensions, \
                  hooks and services the app ends up with.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  unchained bundles\n    \
                  unchained config babel_bundle\n    \
                  unchained --env production config\n    \
                  unchained hooks --run-order\n    \
                  unchained -c ./app/unchained.yaml services"
)]
pub struct Cli {
    /// Unchained config file
    #[arg(
        long,
        short = 'c',
        global = true,
        env = "UNCHAINED_CONFIG",
        default_value = UNCHAINED_CONFIG_FILE
    )]
    pub config: PathBuf,

    /// App environment
    #[arg(
        long,
        short = 'e',
        global = true,
        env = "UNCHAINED_ENV",
        value_enum,
        default_value_t = Env::Development
    )]
    pub env: Env,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered bundles
    Bundles,

    /// Show current app config (or only the options of one bundle)
    Config(ConfigArgs),

    /// List extensions
    Extensions,

    /// List registered hooks
    Hooks(HooksArgs),

    /// List services
    Services,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the config command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show every option:\n    unchained config\n\n\
                  Show the options set by one bundle:\n    unchained config mail_bundle")]
pub struct ConfigArgs {
    /// Only show options for a specific bundle
    pub bundle_name: Option<String>,
}

/// Arguments for the hooks command
#[derive(Parser, Debug)]
pub struct HooksArgs {
    /// List hooks in the order they run instead of the order bundles declare them
    #[arg(long)]
    pub run_order: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
