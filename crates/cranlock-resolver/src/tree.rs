//! Per-root dependency trees and their memoized expansion.

use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use crate::cache::{Expansion, ExpansionCache};
use crate::error::ResolveError;
use crate::provider::DependencyProvider;
use crate::PackageId;

/// The dependencies of one package, each mapped to its own tree.
///
/// Subtrees are shared: a package reached from several parents points at the
/// same memoized tree. A leaf has no children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyTree {
    children: BTreeMap<PackageId, Rc<DependencyTree>>,
}

impl DependencyTree {
    pub fn leaf() -> Self {
        Self::default()
    }

    /// Direct dependencies and their trees, ordered by name.
    pub fn children(&self) -> &BTreeMap<PackageId, Rc<DependencyTree>> {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl FromIterator<(PackageId, Rc<DependencyTree>)> for DependencyTree {
    fn from_iter<I: IntoIterator<Item = (PackageId, Rc<DependencyTree>)>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

/// A package whose dependencies are being expanded.
struct Frame {
    package: PackageId,
    pending: std::vec::IntoIter<PackageId>,
    children: BTreeMap<PackageId, Rc<DependencyTree>>,
}

impl Frame {
    /// Mark `package` in progress and ask the provider for its dependencies.
    fn open<P: DependencyProvider + ?Sized>(
        package: PackageId,
        cache: &mut ExpansionCache,
        provider: &P,
    ) -> Result<Self, ResolveError> {
        let fresh = cache.begin(&package);
        debug_assert!(fresh, "{package} opened twice");
        let deps = provider.direct_dependencies(&package)?;
        tracing::debug!("Expanding {package}: {} direct dependencies", deps.len());

        let mut seen = HashSet::new();
        let pending: Vec<PackageId> = deps
            .into_iter()
            .filter(|dep| seen.insert(dep.clone()))
            .collect();

        Ok(Self {
            package,
            pending: pending.into_iter(),
            children: BTreeMap::new(),
        })
    }
}

/// Expand `root` into its full dependency tree.
///
/// Packages already complete in `cache` are reused without asking the
/// provider again, and every package expanded here is stored in `cache`. A
/// dependency that is still in progress, i.e. one that leads back onto the
/// current path, gets an empty placeholder tree; rejecting the cycle is left
/// to [`crate::order::sort`].
pub fn expand<P: DependencyProvider + ?Sized>(
    root: &str,
    cache: &mut ExpansionCache,
    provider: &P,
) -> Result<Rc<DependencyTree>, ResolveError> {
    match cache.get(root) {
        Some(Expansion::Complete(tree)) => return Ok(tree),
        Some(Expansion::InProgress) => return Ok(Rc::new(DependencyTree::leaf())),
        None => {}
    }

    let mut stack = vec![Frame::open(root.to_string(), cache, provider)?];
    let mut expanded = None;

    while let Some(mut frame) = stack.pop() {
        let Some(dep) = frame.pending.next() else {
            let tree = Rc::new(DependencyTree {
                children: frame.children,
            });
            cache.complete(&frame.package, tree.clone());
            match stack.last_mut() {
                Some(parent) => {
                    parent.children.insert(frame.package, tree);
                }
                None => expanded = Some(tree),
            }
            continue;
        };

        match cache.get(&dep) {
            Some(Expansion::Complete(tree)) => {
                frame.children.insert(dep, tree);
                stack.push(frame);
            }
            Some(Expansion::InProgress) => {
                tracing::debug!("{dep} is already being expanded, leaving a placeholder");
                frame.children.insert(dep, Rc::new(DependencyTree::leaf()));
                stack.push(frame);
            }
            None => {
                let child = Frame::open(dep, cache, provider)?;
                stack.push(frame);
                stack.push(child);
            }
        }
    }

    // The stack only empties once the root frame has completed.
    Ok(expanded.unwrap_or_default())
}
