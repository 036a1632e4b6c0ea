//! Lab app manager CLI
//!
//! The command-line surface over the core app-management layer: list,
//! search, install, and uninstall platform apps.

mod cli;
mod commands;
mod error;
mod fetch;
mod host;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let apps_root = lab_core::config::apps_dir();
    let registry = fetch::load_registry(&lab_core::config::registry_url())?;

    match cli.command {
        Commands::List { all } => commands::run_list(&registry, &apps_root, all),
        Commands::Search {
            app,
            only_compatible,
        } => commands::run_search(&registry, &apps_root, &app, only_compatible),
        Commands::ShowDependencies { app, ecosystems } => {
            commands::run_show_dependencies(&registry, &apps_root, &app, &ecosystems)
        }
        Commands::Install {
            app,
            force,
            ignore_dependencies,
            dry_run,
        } => commands::run_install(
            &registry,
            &apps_root,
            &app,
            force,
            ignore_dependencies,
            dry_run,
        ),
        Commands::Uninstall { name, force } => {
            commands::run_uninstall(&registry, &apps_root, &name, force)
        }
    }
}
