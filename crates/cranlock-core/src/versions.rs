//! The version map: exact version per package, as installed in a reference
//! build.
//!
//! The on-disk format is TSV with the package name in the first column and the
//! version in the second. Empty fields are ignored, so runs of tabs are fine.

use std::collections::BTreeMap;
use std::path::Path;

use cranlock_util::errors::CranlockError;

/// Mapping from package name to the exact version to install.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMap {
    versions: BTreeMap<String, String>,
}

impl VersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TSV content. Blank lines are skipped; a later line for the same
    /// package overrides an earlier one.
    pub fn parse(content: &str) -> miette::Result<Self> {
        let mut versions = BTreeMap::new();
        for (i, line) in content.lines().enumerate() {
            let mut fields = line.trim().split('\t').filter(|f| !f.is_empty());
            let Some(name) = fields.next() else {
                continue;
            };
            let version = fields.next().ok_or_else(|| CranlockError::Input {
                message: format!("line {}: package `{name}` has no version", i + 1),
            })?;
            versions.insert(name.to_string(), version.to_string());
        }
        Ok(Self { versions })
    }

    /// Read and parse a version file.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CranlockError::Input {
            message: format!("Failed to read version file {}: {e}", path.display()),
        })?;
        Self::parse(&content).map_err(|e| {
            CranlockError::Input {
                message: format!("{}: {e}", path.display()),
            }
            .into()
        })
    }

    pub fn insert(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.versions.insert(name.into(), version.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.versions.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Serialize back to TSV, one `name\tversion` line per package, sorted by name.
    pub fn to_tsv(&self) -> String {
        self.versions
            .iter()
            .map(|(name, version)| format!("{name}\t{version}\n"))
            .collect()
    }
}

impl FromIterator<(String, String)> for VersionMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            versions: iter.into_iter().collect(),
        }
    }
}
