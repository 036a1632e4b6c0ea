//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Lab app manager - install and manage platform apps
#[derive(Parser, Debug)]
#[command(name = "lab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List apps with their installed version
    ///
    /// Installed versions are annotated with '*' when the working tree
    /// has local modifications.
    List {
        /// List all available apps, even those not installed
        #[arg(short, long)]
        all: bool,
    },

    /// Show the releases of an app matching a version range
    ///
    /// Examples:
    ///   lab search quantum-viewer
    ///   lab search "quantum-viewer>=1.0,<2.0"
    Search {
        /// App name, optionally with a version range
        app: String,

        /// Only show releases compatible with this environment
        #[arg(long)]
        only_compatible: bool,
    },

    /// Show the dependency declarations of a release
    ShowDependencies {
        /// App name, optionally with a version range
        app: String,

        /// Restrict output to these ecosystems
        #[arg(short = 'e', long = "ecosystem")]
        ecosystems: Vec<String>,
    },

    /// Install an app
    ///
    /// Resolves the highest release matching the requested range,
    /// checks its requirements against this environment, and clones
    /// the release into the apps directory.
    ///
    /// Examples:
    ///   lab install quantum-viewer            # latest release
    ///   lab install "quantum-viewer>=1.0"     # highest 1.x or later
    ///   lab install quantum-viewer -n         # show the plan only
    Install {
        /// App name, optionally with a version range
        app: String,

        /// Reinstall even if this version is already installed
        #[arg(short, long)]
        force: bool,

        /// Skip the host compatibility check
        #[arg(long)]
        ignore_dependencies: bool,

        /// Resolve and report without installing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Remove an installed app
    ///
    /// Refuses when the working tree was modified or is at an unknown
    /// version, unless forced.
    Uninstall {
        /// App name
        name: String,

        /// Remove even a modified or unrecognized working tree
        #[arg(short, long)]
        force: bool,
    },
}
