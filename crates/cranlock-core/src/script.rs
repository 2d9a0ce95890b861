//! The generated R installer script (`dependencies.R`).

use std::fmt;
use std::path::Path;

use cranlock_util::errors::CranlockError;

use crate::config::ScriptConfig;
use crate::versions::VersionMap;

/// One pinned `devtools::install_version` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedInstall {
    pub name: String,
    pub version: String,
}

/// An installer script: global R options followed by pinned installs in
/// dependency order.
#[derive(Debug, Clone)]
pub struct InstallScript {
    pub repos: String,
    pub warn: i32,
    pub installs: Vec<PinnedInstall>,
    /// Packages from the install order that had no version and were left out.
    pub skipped: Vec<String>,
}

impl InstallScript {
    /// Build a script from a dependency-ordered package list.
    ///
    /// Order is preserved. Packages missing from `versions` are recorded in
    /// [`InstallScript::skipped`] instead of being installed.
    pub fn render(order: &[String], versions: &VersionMap, config: &ScriptConfig) -> Self {
        let mut installs = Vec::new();
        let mut skipped = Vec::new();
        for name in order {
            match versions.get(name) {
                Some(version) => installs.push(PinnedInstall {
                    name: name.clone(),
                    version: version.to_string(),
                }),
                None => skipped.push(name.clone()),
            }
        }
        Self {
            repos: config.repos.clone(),
            warn: config.warn,
            installs,
            skipped,
        }
    }

    /// Write the script to `path`, creating the parent directory if needed.
    pub fn write_to(&self, path: &Path) -> miette::Result<()> {
        cranlock_util::fs::ensure_parent_dir(path).map_err(CranlockError::Io)?;
        std::fs::write(path, self.to_string()).map_err(|e| CranlockError::Generic {
            message: format!("Failed to write {}: {e}", path.display()),
        })?;
        Ok(())
    }
}

impl fmt::Display for InstallScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Generated from cranlock")?;
        writeln!(f, "options(warn={})", self.warn)?;
        writeln!(f, "options(Ncpus=parallel::detectCores())")?;
        writeln!(f, "options(repos=structure(c(CRAN=\"{}\")))", self.repos)?;
        for install in &self.installs {
            writeln!(
                f,
                "devtools::install_version('{}', version='{}')",
                install.name, install.version
            )?;
        }
        Ok(())
    }
}
