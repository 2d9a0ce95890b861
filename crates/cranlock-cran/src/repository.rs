//! CRAN site abstraction: URL layout of package pages.

use cranlock_core::config::RegistryConfig;

/// A CRAN site (the main one or a mirror) that serves package pages.
#[derive(Debug, Clone)]
pub struct CranRepository {
    pub url: String,
}

impl CranRepository {
    /// Build a repository from a base URL, dropping any trailing slash.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Build a repository from the `[registry]` section of the global config.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(&config.url)
    }

    /// URL of the summary page for a package.
    ///
    /// `dplyr` becomes `https://cran.r-project.org/web/packages/dplyr/index.html`
    pub fn package_url(&self, package: &str) -> String {
        format!("{}/web/packages/{package}/index.html", self.url)
    }
}
