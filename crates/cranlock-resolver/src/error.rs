use miette::Diagnostic;
use thiserror::Error;

/// Why a resolution run failed. Every variant aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    /// A requested or transitively referenced package does not exist.
    #[error("Package `{name}` was not found in the package index")]
    #[diagnostic(help("Check the spelling; archived packages have no index page"))]
    UnknownPackage { name: String },

    /// The dependency graph has a cycle. `path` starts and ends with the same package.
    #[error("Dependency cycle detected: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    /// The provider failed for a reason other than a missing package.
    #[error("Failed to get dependencies of `{package}`: {message}")]
    Provider { package: String, message: String },

    /// A background fetch task panicked or was cancelled.
    #[error("Dependency fetch aborted: {message}")]
    FetchAborted { message: String },
}

impl ResolveError {
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownPackage { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_shows_path() {
        let err = ResolveError::CycleDetected {
            path: vec!["A".into(), "B".into(), "A".into()],
        };
        assert_eq!(err.to_string(), "Dependency cycle detected: A -> B -> A");
    }

    #[test]
    fn unknown_package_message() {
        assert_eq!(
            ResolveError::unknown("ghost").to_string(),
            "Package `ghost` was not found in the package index"
        );
    }
}
