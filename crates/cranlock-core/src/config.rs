use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base URL of the CRAN site whose package pages list dependencies.
pub const DEFAULT_REGISTRY_URL: &str = "https://cran.r-project.org";

/// Mirror the generated installer script installs from.
pub const DEFAULT_SCRIPT_REPOS: &str = "https://cran.revolutionanalytics.com";

/// Global user configuration loaded from `~/.cranlock/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub script: ScriptConfig,
}

/// Package index settings from `[registry]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_registry_url")]
    pub url: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: default_registry_url(),
        }
    }
}

fn default_registry_url() -> String {
    DEFAULT_REGISTRY_URL.to_string()
}

/// Network settings from `[fetch]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Maximum number of package pages fetched concurrently.
    #[serde(default = "default_jobs")]
    pub jobs: usize,
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_timeout_secs", rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            jobs: default_jobs(),
            retries: default_retries(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_jobs() -> usize {
    8
}

fn default_retries() -> u32 {
    3
}

fn default_timeout_secs() -> u64 {
    120
}

/// Installer script settings from `[script]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// CRAN mirror written into `options(repos=...)`.
    #[serde(default = "default_script_repos")]
    pub repos: String,
    /// Value for `options(warn=...)`; 2 turns install warnings into errors.
    #[serde(default = "default_warn")]
    pub warn: i32,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            repos: default_script_repos(),
            warn: default_warn(),
        }
    }
}

fn default_script_repos() -> String {
    DEFAULT_SCRIPT_REPOS.to_string()
}

fn default_warn() -> i32 {
    2
}

impl GlobalConfig {
    /// Load the global configuration from `~/.cranlock/config.toml`, or return
    /// defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, falling back to defaults when it is missing.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if !path.is_file() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            cranlock_util::errors::CranlockError::Config {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            cranlock_util::errors::CranlockError::Config {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the cranlock data directory (`~/.cranlock/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".cranlock")
}
