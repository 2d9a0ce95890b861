//! Dependency graph construction and traversal.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;

use crate::tree::DependencyTree;
use crate::PackageId;

/// Every package reachable from the requested roots, mapped to the set of its
/// direct dependencies.
///
/// Any package that appears as a dependency also has its own entry, possibly
/// with an empty set. Packages and their dependency sets iterate in
/// lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: BTreeMap<PackageId, BTreeSet<PackageId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package with no dependencies. Returns `false` if it was already present.
    pub fn add_package(&mut self, package: &str) -> bool {
        if self.edges.contains_key(package) {
            return false;
        }
        self.edges.insert(package.to_string(), BTreeSet::new());
        true
    }

    /// Record that `from` depends on `to`, adding either package if missing.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.add_package(to);
        if let Some(deps) = self.edges.get_mut(from) {
            if !deps.contains(to) {
                deps.insert(to.to_string());
            }
            return;
        }
        self.edges.insert(from.to_string(), BTreeSet::from([to.to_string()]));
    }

    pub fn contains(&self, package: &str) -> bool {
        self.edges.contains_key(package)
    }

    /// Direct dependencies of a package, or `None` if it is not in the graph.
    pub fn dependencies_of(&self, package: &str) -> Option<&BTreeSet<PackageId>> {
        self.edges.get(package)
    }

    /// Packages that depend directly on `package`, in lexicographic order.
    pub fn dependents_of(&self, package: &str) -> Vec<&str> {
        self.edges
            .iter()
            .filter(|(_, deps)| deps.contains(package))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// All packages in lexicographic order.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Number of packages.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of dependency edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Print the dependency tree of each root, Cargo-style.
    ///
    /// A package whose subtree was already printed is shown once more with a
    /// `(*)` marker instead of repeating the subtree.
    pub fn print_tree(&self, roots: &[PackageId], max_depth: Option<usize>) -> String {
        let mut output = String::new();
        let mut printed = HashSet::new();
        for root in roots {
            if !self.contains(root) {
                continue;
            }
            output.push_str(&format!("{root}\n"));
            let mut path = HashSet::from([root.as_str()]);
            printed.insert(root.as_str());
            self.print_children(&mut output, root, "", 1, max_depth, &mut path, &mut printed);
        }
        output
    }

    #[allow(clippy::too_many_arguments)]
    fn print_children<'a>(
        &'a self,
        output: &mut String,
        package: &str,
        prefix: &str,
        depth: usize,
        max_depth: Option<usize>,
        path: &mut HashSet<&'a str>,
        printed: &mut HashSet<&'a str>,
    ) {
        if let Some(max) = max_depth {
            if depth > max {
                return;
            }
        }
        let Some(deps) = self.edges.get(package) else {
            return;
        };

        let count = deps.len();
        for (i, dep) in deps.iter().enumerate() {
            let is_last = i == count - 1;
            let connector = if is_last { "└── " } else { "├── " };
            let dep = dep.as_str();

            if path.contains(dep) {
                output.push_str(&format!("{prefix}{connector}{dep} (cycle)\n"));
                continue;
            }
            let expandable = self.edges.get(dep).is_some_and(|d| !d.is_empty());
            if expandable && !printed.insert(dep) {
                output.push_str(&format!("{prefix}{connector}{dep} (*)\n"));
                continue;
            }
            output.push_str(&format!("{prefix}{connector}{dep}\n"));

            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            path.insert(dep);
            self.print_children(output, dep, &child_prefix, depth + 1, max_depth, path, printed);
            path.remove(dep);
        }
    }

    /// Shortest dependency path from any of `roots` to `target`.
    ///
    /// Roots are tried in the order given; the path starts at a root and ends
    /// at `target`.
    pub fn find_path(&self, roots: &[PackageId], target: &str) -> Option<Vec<&str>> {
        if !self.contains(target) {
            return None;
        }

        let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
        let mut queue = VecDeque::new();
        for root in roots {
            if let Some((name, _)) = self.edges.get_key_value(root.as_str()) {
                if parents.insert(name.as_str(), None).is_none() {
                    queue.push_back(name.as_str());
                }
            }
        }

        while let Some(current) = queue.pop_front() {
            if current == target {
                let mut path = vec![current];
                let mut cursor = current;
                while let Some(&Some(parent)) = parents.get(cursor) {
                    path.push(parent);
                    cursor = parent;
                }
                path.reverse();
                return Some(path);
            }
            for dep in self.edges.get(current).into_iter().flatten() {
                if !parents.contains_key(dep.as_str()) {
                    parents.insert(dep.as_str(), Some(current));
                    queue.push_back(dep.as_str());
                }
            }
        }
        None
    }
}

/// Flatten per-root trees into one graph.
///
/// Every root and every package nested anywhere in a tree gets an entry, and
/// each package's children become its dependency set, so edges contributed by
/// different roots are unioned. A shared subtree is walked once per package.
pub fn merge(trees: &BTreeMap<PackageId, Rc<DependencyTree>>) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    let mut walked: HashSet<(&str, *const DependencyTree)> = HashSet::new();
    let mut work: Vec<(&str, &DependencyTree)> = Vec::new();

    for (root, tree) in trees {
        graph.add_package(root);
        work.push((root.as_str(), tree.as_ref()));
    }

    while let Some((package, tree)) = work.pop() {
        if !walked.insert((package, tree as *const DependencyTree)) {
            continue;
        }
        for (child, subtree) in tree.children() {
            graph.add_edge(package, child);
            work.push((child.as_str(), subtree.as_ref()));
        }
    }

    tracing::debug!(
        "Merged {} trees into {} packages and {} edges",
        trees.len(),
        graph.len(),
        graph.edge_count()
    );
    graph
}
