//! High-level operations behind the `cranlock` commands.
//!
//! Each `ops_*` module implements one command on top of the core, resolver
//! and CRAN crates. Command handlers in the binary only parse arguments and
//! call into here.

pub mod ops_lock;
pub mod ops_tree;
pub mod ops_versions;

use std::sync::Arc;

use cranlock_core::config::GlobalConfig;
use cranlock_core::packages::PackageList;
use cranlock_cran::index::CranIndex;
use cranlock_cran::repository::CranRepository;
use cranlock_resolver::resolver::{self, Resolution};

/// Settings given on the command line that take precedence over the global config.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub registry: Option<String>,
    pub jobs: Option<usize>,
}

impl Overrides {
    pub fn apply(&self, config: &mut GlobalConfig) {
        if let Some(url) = &self.registry {
            config.registry.url = url.clone();
        }
        if let Some(jobs) = self.jobs {
            config.fetch.jobs = jobs;
        }
    }
}

/// Load `~/.cranlock/config.toml` and apply command-line overrides.
pub fn load_config(overrides: &Overrides) -> miette::Result<GlobalConfig> {
    let mut config = GlobalConfig::load()?;
    overrides.apply(&mut config);
    tracing::debug!(
        "Using registry {} with {} concurrent fetches",
        config.registry.url,
        config.fetch.jobs
    );
    Ok(config)
}

/// Resolve the requested packages against the configured CRAN site.
pub async fn resolve_packages(
    config: &GlobalConfig,
    packages: &PackageList,
) -> miette::Result<Resolution> {
    let repo = CranRepository::from_config(&config.registry);
    let index = Arc::new(CranIndex::new(repo, &config.fetch)?);
    let resolution =
        resolver::resolve_remote(index.clone(), packages.as_slice(), config.fetch.jobs).await?;
    tracing::debug!("Read {} package pages", index.cached_pages());
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let mut config = GlobalConfig::default();
        let overrides = Overrides {
            registry: Some("https://cran.example.org".to_string()),
            jobs: Some(2),
        };
        overrides.apply(&mut config);
        assert_eq!(config.registry.url, "https://cran.example.org");
        assert_eq!(config.fetch.jobs, 2);
    }

    #[test]
    fn empty_overrides_keep_config() {
        let mut config = GlobalConfig::default();
        Overrides::default().apply(&mut config);
        assert_eq!(config.registry.url, "https://cran.r-project.org");
        assert_eq!(config.fetch.jobs, 8);
    }
}
