//! Concurrent read-ahead of direct dependency lists from a [`DependencySource`].

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::error::ResolveError;
use crate::provider::{DependencyProvider, DependencySource};
use crate::PackageId;

/// Direct dependency lists fetched for one run, keyed by package.
///
/// Serves as the [`DependencyProvider`] for the synchronous resolver. Only
/// packages reachable from the prefetched roots are present.
#[derive(Debug, Clone, Default)]
pub struct FetchedDependencies {
    lists: HashMap<PackageId, Vec<PackageId>>,
}

impl FetchedDependencies {
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl DependencyProvider for FetchedDependencies {
    fn direct_dependencies(&self, package: &str) -> Result<Vec<PackageId>, ResolveError> {
        self.lists.direct_dependencies(package)
    }
}

/// Fetch the direct dependencies of every package reachable from `roots`.
///
/// Works level by level: all packages first seen at the same depth are
/// fetched concurrently, at most `jobs` at a time. Each package is asked for
/// once. The first error aborts the fetches still in flight and is returned.
pub async fn prefetch<S>(
    source: Arc<S>,
    roots: &[PackageId],
    jobs: usize,
) -> Result<FetchedDependencies, ResolveError>
where
    S: DependencySource + ?Sized + 'static,
{
    let semaphore = Arc::new(Semaphore::new(jobs.max(1)));
    let mut lists: HashMap<PackageId, Vec<PackageId>> = HashMap::new();
    let mut level: BTreeSet<PackageId> = roots.iter().cloned().collect();
    let mut depth = 0usize;

    while !level.is_empty() {
        tracing::debug!("Fetching {} packages at depth {depth}", level.len());

        let mut join_set = JoinSet::new();
        for package in &level {
            let source = source.clone();
            let sem = semaphore.clone();
            let package = package.clone();
            join_set.spawn(async move {
                let _permit = sem.acquire().await;
                let result = source.direct_dependencies(&package).await;
                (package, result)
            });
        }

        let mut next = BTreeSet::new();
        while let Some(joined) = join_set.join_next().await {
            let (package, result) = match joined {
                Ok(done) => done,
                Err(e) => {
                    join_set.abort_all();
                    return Err(ResolveError::FetchAborted {
                        message: e.to_string(),
                    });
                }
            };
            let deps = match result {
                Ok(deps) => deps,
                Err(e) => {
                    tracing::debug!("Fetching {package} failed, cancelling remaining fetches");
                    join_set.abort_all();
                    return Err(e);
                }
            };
            next.extend(deps.iter().cloned());
            lists.insert(package, deps);
        }

        next.retain(|p| !lists.contains_key(p));
        level = next;
        depth += 1;
    }

    Ok(FetchedDependencies { lists })
}
