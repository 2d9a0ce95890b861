//! The package file: the root packages a project asks for.

use std::collections::HashSet;
use std::path::Path;

use cranlock_util::errors::CranlockError;

/// Requested root packages, in file order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageList {
    packages: Vec<String>,
}

impl PackageList {
    /// Parse a package file: one name per line.
    ///
    /// Surrounding whitespace is trimmed; blank lines and `#` comments are skipped.
    pub fn parse(content: &str) -> Self {
        let mut seen = HashSet::new();
        let packages = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect();
        Self { packages }
    }

    /// Read and parse a package file.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CranlockError::Input {
            message: format!("Failed to read package file {}: {e}", path.display()),
        })?;
        Ok(Self::parse(&content))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
