//! Resolution driver: expand every root, merge, and order.

use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::cache::ExpansionCache;
use crate::error::ResolveError;
use crate::graph::{self, DependencyGraph};
use crate::order;
use crate::prefetch;
use crate::provider::{DependencyProvider, DependencySource};
use crate::tree::{self, DependencyTree};
use crate::PackageId;

/// The merged graph for a set of roots together with its install order.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub roots: Vec<PackageId>,
    pub graph: DependencyGraph,
    /// Every package in the graph, dependencies before dependents.
    pub order: Vec<PackageId>,
}

/// Expand every root with one fresh cache and merge the resulting trees.
///
/// The cache lives only for this call, so no state carries over between runs.
pub fn resolve_graph<P: DependencyProvider + ?Sized>(
    roots: &[PackageId],
    provider: &P,
) -> Result<DependencyGraph, ResolveError> {
    let mut cache = ExpansionCache::new();
    let mut trees: BTreeMap<PackageId, Rc<DependencyTree>> = BTreeMap::new();
    for root in roots {
        if trees.contains_key(root) {
            continue;
        }
        let tree = tree::expand(root, &mut cache, provider)?;
        trees.insert(root.clone(), tree);
    }
    tracing::debug!(
        "Expanded {} roots, {} packages seen",
        trees.len(),
        cache.len()
    );
    Ok(graph::merge(&trees))
}

/// Resolve `roots` into an install order in which each package follows all
/// of its transitive dependencies.
pub fn resolve<P: DependencyProvider + ?Sized>(
    roots: &[PackageId],
    provider: &P,
) -> Result<Resolution, ResolveError> {
    let graph = resolve_graph(roots, provider)?;
    let order = order::sort(&graph)?;
    Ok(Resolution {
        roots: roots.to_vec(),
        graph,
        order,
    })
}

/// Read dependency lists from `source` with up to `jobs` concurrent fetches,
/// then resolve them.
pub async fn resolve_remote<S>(
    source: Arc<S>,
    roots: &[PackageId],
    jobs: usize,
) -> Result<Resolution, ResolveError>
where
    S: DependencySource + ?Sized + 'static,
{
    let fetched = prefetch::prefetch(source, roots, jobs).await?;
    tracing::debug!("Fetched dependency lists for {} packages", fetched.len());
    resolve(roots, &fetched)
}
