//! CLI argument definitions for cranlock.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cranlock",
    version,
    about = "Lock R package dependencies for reproducible builds",
    long_about = "Locks all R dependencies and transitive dependencies for reproducible builds. \
                  Relies on a Docker image with the dependencies installed to find the exact \
                  versions of transitive dependencies."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the CRAN site to read package pages from
    #[arg(long, global = true, env = "CRANLOCK_REGISTRY")]
    pub registry: Option<String>,

    /// Maximum number of concurrent page fetches
    #[arg(short, long, global = true)]
    pub jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a package file and write a pinned installer script
    Lock {
        /// A list of packages to install, one per line
        package_file: PathBuf,
        /// Docker image holding a previous successful build to read versions from
        #[arg(short, long)]
        image: Option<String>,
        /// Location of the versions file [default: versions.tsv next to the package file]
        #[arg(long)]
        version_file: Option<PathBuf>,
        /// Location of the generated R script [default: dependencies.R next to the package file]
        #[arg(short, long)]
        output_file: Option<PathBuf>,
    },

    /// Display the dependency tree of a package file
    Tree {
        /// A list of packages, one per line
        package_file: PathBuf,
        /// Maximum depth to display
        #[arg(long)]
        depth: Option<u32>,
        /// Show the path to a specific package
        #[arg(long)]
        why: Option<String>,
    },

    /// Write the package versions installed in a Docker image to a TSV file
    Versions {
        /// Docker image to inspect
        image: String,
        /// Where to write the versions
        #[arg(short, long, default_value = "versions.tsv")]
        output: PathBuf,
    },
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
