//! TW CLI - TimegeekerWiki navigation configuration.
//!
//! Provides commands for:
//! - `check`: Validate the configuration and report broken links
//! - `export`: Print the configuration for the site engine
//! - `sidebar`: Show the sidebar resolved for a route
//! - `scaffold`: Derive sidebars from the content directory
//! - `watch`: Rebuild and re-check on every change

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ExportArgs, ScaffoldArgs, SidebarArgs, WatchArgs};
use output::Output;

/// TW - TimegeekerWiki navigation configuration.
#[derive(Parser)]
#[command(name = "tw", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and check links against the content.
    Check(CheckArgs),
    /// Print the configuration.
    Export(ExportArgs),
    /// Show the sidebar displayed for a route.
    Sidebar(SidebarArgs),
    /// Derive sidebars from the content directory and print them as TOML.
    Scaffold(ScaffoldArgs),
    /// Watch configuration and content, rebuilding on change.
    Watch(WatchArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Check(args) => args.verbose,
        Commands::Watch(args) => args.verbose,
        _ => false,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Export(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
        Commands::Scaffold(args) => args.execute(),
        Commands::Watch(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
