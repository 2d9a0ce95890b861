//! Install ordering: dependencies before dependents, cycles rejected.

use std::collections::{btree_set, BTreeSet, HashMap};

use crate::error::ResolveError;
use crate::graph::DependencyGraph;
use crate::PackageId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Order every package in `graph` so that each one appears after all of its
/// dependencies.
///
/// Traversal starts from packages in lexicographic order and visits
/// dependencies in lexicographic order, so the result is identical across
/// runs. Reaching a package that is still on the current path fails with
/// [`ResolveError::CycleDetected`], whose path starts and ends at that package.
pub fn sort(graph: &DependencyGraph) -> Result<Vec<PackageId>, ResolveError> {
    let no_deps = BTreeSet::new();
    let mut marks: HashMap<&str, Mark> = graph.packages().map(|p| (p, Mark::Unvisited)).collect();
    let mut order = Vec::with_capacity(graph.len());
    let mut stack: Vec<(&str, btree_set::Iter<'_, PackageId>)> = Vec::new();

    for start in graph.packages() {
        if marks.get(start) != Some(&Mark::Unvisited) {
            continue;
        }
        marks.insert(start, Mark::InProgress);
        stack.push((start, graph.dependencies_of(start).unwrap_or(&no_deps).iter()));

        while let Some((package, deps)) = stack.last_mut() {
            let package = *package;
            let Some(dep) = deps.next() else {
                marks.insert(package, Mark::Done);
                order.push(package.to_string());
                stack.pop();
                continue;
            };
            let dep = dep.as_str();

            match marks.get(dep).copied().unwrap_or(Mark::Unvisited) {
                Mark::Done => {}
                Mark::InProgress => {
                    let from = stack.iter().position(|(p, _)| *p == dep).unwrap_or(0);
                    let mut path: Vec<PackageId> =
                        stack[from..].iter().map(|(p, _)| p.to_string()).collect();
                    path.push(dep.to_string());
                    tracing::debug!("Cycle found while ordering: {}", path.join(" -> "));
                    return Err(ResolveError::CycleDetected { path });
                }
                Mark::Unvisited => {
                    marks.insert(dep, Mark::InProgress);
                    stack.push((dep, graph.dependencies_of(dep).unwrap_or(&no_deps).iter()));
                }
            }
        }
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &str)], isolated: &[&str]) -> DependencyGraph {
        let mut g = DependencyGraph::new();
        for (from, to) in edges {
            g.add_edge(from, to);
        }
        for p in isolated {
            g.add_package(p);
        }
        g
    }

    fn position(order: &[PackageId], name: &str) -> usize {
        order.iter().position(|p| p == name).unwrap()
    }

    #[test]
    fn chain_orders_dependencies_first() {
        let g = graph(&[("A", "B"), ("B", "C")], &[]);
        assert_eq!(sort(&g).unwrap(), vec!["C", "B", "A"]);
    }

    #[test]
    fn diamond() {
        let g = graph(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")], &[]);
        let order = sort(&g).unwrap();
        assert_eq!(order, vec!["D", "B", "C", "A"]);
        assert!(position(&order, "D") < position(&order, "B"));
        assert!(position(&order, "D") < position(&order, "C"));
    }

    #[test]
    fn isolated_packages_are_included() {
        let g = graph(&[("tibble", "rlang")], &["R6", "zeallot"]);
        assert_eq!(sort(&g).unwrap(), vec!["R6", "rlang", "tibble", "zeallot"]);
    }

    #[test]
    fn empty_graph() {
        assert!(sort(&DependencyGraph::new()).unwrap().is_empty());
    }

    #[test]
    fn two_cycle_reports_path() {
        let g = graph(&[("A", "B"), ("B", "A")], &[]);
        assert_eq!(
            sort(&g),
            Err(ResolveError::CycleDetected {
                path: vec!["A".into(), "B".into(), "A".into()]
            })
        );
    }

    #[test]
    fn cycle_path_starts_at_repeated_package() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "B")], &[]);
        let Err(ResolveError::CycleDetected { path }) = sort(&g) else {
            panic!("expected a cycle");
        };
        assert_eq!(path, vec!["B", "C", "D", "B"]);
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let g = graph(&[("A", "A")], &[]);
        assert_eq!(
            sort(&g),
            Err(ResolveError::CycleDetected {
                path: vec!["A".into(), "A".into()]
            })
        );
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let mut g = DependencyGraph::new();
        for i in 0..50_000 {
            g.add_edge(&format!("p{i:05}"), &format!("p{:05}", i + 1));
        }
        let order = sort(&g).unwrap();
        assert_eq!(order.len(), 50_001);
        assert_eq!(order.first().map(String::as_str), Some("p50000"));
        assert_eq!(order.last().map(String::as_str), Some("p00000"));
    }
}
