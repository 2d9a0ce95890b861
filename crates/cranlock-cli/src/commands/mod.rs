//! Command dispatch and handler modules.

mod lock;
mod tree;
mod versions;

use miette::Result;

use cranlock_ops::Overrides;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let overrides = Overrides {
        registry: cli.registry,
        jobs: cli.jobs,
    };
    match cli.command {
        Command::Lock {
            package_file,
            image,
            version_file,
            output_file,
        } => lock::exec(package_file, image, version_file, output_file, &overrides).await,
        Command::Tree {
            package_file,
            depth,
            why,
        } => tree::exec(&package_file, depth, why, &overrides).await,
        Command::Versions { image, output } => versions::exec(&image, &output),
    }
}
