//! Where direct dependency lists come from.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use cranlock_cran::index::CranIndex;

use crate::error::ResolveError;
use crate::PackageId;

/// Synchronous lookup of a package's direct dependencies, used by the tree builder.
///
/// Returned lists may contain duplicates and carry no meaningful order.
/// A package the provider does not know is [`ResolveError::UnknownPackage`].
pub trait DependencyProvider {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<PackageId>, ResolveError>;
}

impl<P: DependencyProvider + ?Sized> DependencyProvider for &P {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<PackageId>, ResolveError> {
        (**self).direct_dependencies(package)
    }
}

impl DependencyProvider for HashMap<PackageId, Vec<PackageId>> {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<PackageId>, ResolveError> {
        self.get(package)
            .cloned()
            .ok_or_else(|| ResolveError::unknown(package))
    }
}

impl DependencyProvider for BTreeMap<PackageId, Vec<PackageId>> {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<PackageId>, ResolveError> {
        self.get(package)
            .cloned()
            .ok_or_else(|| ResolveError::unknown(package))
    }
}

/// Asynchronous, possibly remote, source of direct dependency lists.
///
/// Read ahead of resolution by [`crate::prefetch::prefetch`], which calls it
/// at most once per package.
#[async_trait]
pub trait DependencySource: Send + Sync {
    async fn direct_dependencies(&self, package: &str) -> Result<Vec<PackageId>, ResolveError>;
}

#[async_trait]
impl DependencySource for CranIndex {
    async fn direct_dependencies(&self, package: &str) -> Result<Vec<PackageId>, ResolveError> {
        match CranIndex::direct_dependencies(self, package).await {
            Ok(Some(deps)) => Ok(deps),
            Ok(None) => Err(ResolveError::unknown(package)),
            Err(e) => Err(ResolveError::Provider {
                package: package.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
