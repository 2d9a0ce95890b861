//! Per-run memoization of tree expansion.
//!
//! Shared by every root expanded in one resolution run so a package reached
//! from many places is looked up and expanded once. Created at the start of a
//! run and dropped with it.

use std::collections::HashMap;
use std::rc::Rc;

use crate::tree::DependencyTree;
use crate::PackageId;

/// Expansion state of one package.
#[derive(Debug, Clone)]
pub enum Expansion {
    /// On the current expansion path; its tree is not known yet.
    InProgress,
    Complete(Rc<DependencyTree>),
}

#[derive(Debug, Default)]
pub struct ExpansionCache {
    entries: HashMap<PackageId, Expansion>,
}

impl ExpansionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, package: &str) -> Option<Expansion> {
        self.entries.get(package).cloned()
    }

    /// Mark a package as being expanded. Returns `false` if it was already seen.
    pub fn begin(&mut self, package: &str) -> bool {
        if self.entries.contains_key(package) {
            return false;
        }
        self.entries.insert(package.to_string(), Expansion::InProgress);
        true
    }

    /// Record the finished tree of a package.
    pub fn complete(&mut self, package: &str, tree: Rc<DependencyTree>) {
        self.entries.insert(package.to_string(), Expansion::Complete(tree));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_tracking() {
        let mut cache = ExpansionCache::new();
        assert!(cache.begin("rlang"));
        assert!(!cache.begin("rlang"));
        assert!(matches!(cache.get("rlang"), Some(Expansion::InProgress)));

        cache.complete("rlang", Rc::new(DependencyTree::leaf()));
        assert!(matches!(cache.get("rlang"), Some(Expansion::Complete(_))));
        assert!(cache.get("cli").is_none());
        assert_eq!(cache.len(), 1);
    }
}
