//! Operation: read installed package versions out of a reference Docker image.

use std::path::Path;

use cranlock_core::versions::VersionMap;
use cranlock_util::errors::CranlockError;
use cranlock_util::process::CommandBuilder;

/// R expression printing `name<TAB>version` for every installed package.
pub const INSTALLED_VERSIONS_EXPR: &str =
    "ip <- installed.packages()[, c('Package', 'Version'), drop = FALSE]; \
     write.table(ip, sep = '\\t', quote = FALSE, row.names = FALSE, col.names = FALSE)";

/// `docker run` invocation that lists the packages installed in `image`.
pub fn versions_command(image: &str) -> CommandBuilder {
    CommandBuilder::new("docker")
        .args(["run", "--rm", "--entrypoint", "Rscript"])
        .arg(image)
        .args(["-e", INSTALLED_VERSIONS_EXPR])
}

/// Run `command` and parse its output as a version map.
pub fn extract(command: &CommandBuilder) -> miette::Result<VersionMap> {
    tracing::debug!("Running {command}");
    let stdout = command.exec_stdout()?;
    let versions = VersionMap::parse(&stdout).map_err(|e| CranlockError::Process {
        message: format!("unexpected output from `{}`: {e}", command.program()),
    })?;
    if versions.is_empty() {
        return Err(CranlockError::Process {
            message: format!("`{}` reported no installed packages", command.program()),
        }
        .into());
    }
    Ok(versions)
}

/// Run `command` and write the version map it reports to `output`.
///
/// On failure no version file is left behind.
pub fn write_versions(command: &CommandBuilder, output: &Path) -> miette::Result<VersionMap> {
    let result = extract(command).and_then(|versions| {
        cranlock_util::fs::ensure_parent_dir(output).map_err(CranlockError::Io)?;
        std::fs::write(output, versions.to_tsv()).map_err(|e| CranlockError::Generic {
            message: format!("Failed to write {}: {e}", output.display()),
        })?;
        Ok(versions)
    });
    if result.is_err() {
        cranlock_util::fs::remove_quietly(output);
    }
    result
}

/// Extract the versions installed in `image` into `output`.
pub fn versions(image: &str, output: &Path) -> miette::Result<VersionMap> {
    use cranlock_util::progress::{spinner, status};

    let sp = spinner(&format!("Reading installed packages from {image}..."));
    let result = write_versions(&versions_command(image), output);
    sp.finish_and_clear();

    let versions = result.map_err(|e| {
        e.wrap_err(format!("Could not get the package versions from image '{image}'"))
    })?;
    status(
        "Extracted",
        &format!("{} package versions to {}", versions.len(), output.display()),
    );
    Ok(versions)
}
