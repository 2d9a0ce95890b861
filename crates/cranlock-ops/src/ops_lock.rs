//! Operation: resolve a package file and write the pinned installer script.

use std::path::{Path, PathBuf};

use cranlock_core::config::{GlobalConfig, ScriptConfig};
use cranlock_core::packages::PackageList;
use cranlock_core::script::InstallScript;
use cranlock_core::versions::VersionMap;
use cranlock_util::errors::CranlockError;
use cranlock_util::fs::{remove_quietly, sibling};

use crate::{ops_versions, Overrides};

pub const DEFAULT_VERSION_FILE: &str = "versions.tsv";
pub const DEFAULT_OUTPUT_FILE: &str = "dependencies.R";

/// Options for `cranlock lock`.
#[derive(Debug, Clone)]
pub struct LockOptions {
    pub package_file: PathBuf,
    /// Reference image to read versions from. Without it the version file must exist.
    pub image: Option<String>,
    pub version_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}

impl LockOptions {
    pub fn new(package_file: impl Into<PathBuf>) -> Self {
        Self {
            package_file: package_file.into(),
            image: None,
            version_file: None,
            output_file: None,
        }
    }

    /// The version file, `versions.tsv` next to the package file by default.
    pub fn version_file(&self) -> PathBuf {
        self.version_file
            .clone()
            .unwrap_or_else(|| sibling(&self.package_file, DEFAULT_VERSION_FILE))
    }

    /// The script to write, `dependencies.R` next to the package file by default.
    pub fn output_file(&self) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| sibling(&self.package_file, DEFAULT_OUTPUT_FILE))
    }
}

/// Lock the packages in `opts.package_file` using the global configuration.
pub async fn lock(opts: &LockOptions, overrides: &Overrides) -> miette::Result<InstallScript> {
    let config = crate::load_config(overrides)?;
    lock_with_config(opts, &config).await
}

/// Lock with an already loaded configuration.
///
/// Files written by this run are removed again if any later step fails.
pub async fn lock_with_config(
    opts: &LockOptions,
    config: &GlobalConfig,
) -> miette::Result<InstallScript> {
    if !opts.package_file.is_file() {
        return Err(CranlockError::Input {
            message: format!("{} does not exist", opts.package_file.display()),
        }
        .into());
    }

    let mut created = Vec::new();
    let result = run(opts, config, &mut created).await;
    if result.is_err() {
        for path in &created {
            tracing::debug!("Removing {} after failed lock", path.display());
            remove_quietly(path);
        }
    }
    result
}

async fn run(
    opts: &LockOptions,
    config: &GlobalConfig,
    created: &mut Vec<PathBuf>,
) -> miette::Result<InstallScript> {
    use cranlock_util::progress::{spinner, status, status_warn};

    let version_file = opts.version_file();
    let versions = match &opts.image {
        Some(image) => {
            created.push(version_file.clone());
            ops_versions::versions(image, &version_file)?
        }
        None => VersionMap::from_path(&version_file)?,
    };

    let packages = PackageList::from_path(&opts.package_file)?;
    if packages.is_empty() {
        status_warn(
            "Warning",
            &format!("{} lists no packages", opts.package_file.display()),
        );
    }

    let sp = spinner(&format!("Resolving {} packages...", packages.len()));
    let resolution = crate::resolve_packages(config, &packages).await;
    sp.finish_and_clear();
    let resolution = resolution?;

    let output = opts.output_file();
    created.push(output.clone());
    let script = write_script(&resolution.order, &versions, &config.script, &output)?;

    if !script.skipped.is_empty() {
        tracing::debug!("No version for: {}", script.skipped.join(", "));
    }
    status(
        "Locked",
        &format!(
            "{} packages to {} ({} without a version skipped)",
            script.installs.len(),
            output.display(),
            script.skipped.len()
        ),
    );
    Ok(script)
}

/// Render the installer script for a resolved order and write it to `output`.
pub fn write_script(
    order: &[String],
    versions: &VersionMap,
    config: &ScriptConfig,
    output: &Path,
) -> miette::Result<InstallScript> {
    let script = InstallScript::render(order, versions, config);
    script.write_to(output)?;
    Ok(script)
}
