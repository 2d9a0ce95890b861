use std::collections::{BTreeMap, HashMap, HashSet};

use cranlock_resolver::resolver::{resolve, resolve_graph};
use cranlock_resolver::{DependencyProvider, PackageId, ResolveError};
use proptest::prelude::*;

fn provider(edges: &[(&str, &[&str])]) -> HashMap<PackageId, Vec<PackageId>> {
    edges
        .iter()
        .map(|(p, ds)| (p.to_string(), ds.iter().map(|d| d.to_string()).collect()))
        .collect()
}

fn names(list: &[&str]) -> Vec<PackageId> {
    list.iter().map(|s| s.to_string()).collect()
}

fn position(order: &[PackageId], name: &str) -> usize {
    order
        .iter()
        .position(|p| p == name)
        .unwrap_or_else(|| panic!("{name} missing from {order:?}"))
}

/// Every package in the order comes after each of its direct dependencies.
fn assert_dependencies_first(provider: &impl DependencyProvider, order: &[PackageId]) {
    for package in order {
        for dep in provider.direct_dependencies(package).unwrap() {
            assert!(
                position(order, &dep) < position(order, package),
                "{dep} should come before {package} in {order:?}"
            );
        }
    }
}

#[test]
fn realistic_tidyverse_slice() {
    let p = provider(&[
        (
            "dplyr",
            &[
                "cli", "generics", "glue", "lifecycle", "magrittr", "pillar", "R6", "rlang",
                "tibble", "tidyselect", "vctrs",
            ],
        ),
        (
            "tidyr",
            &[
                "cli", "dplyr", "glue", "lifecycle", "magrittr", "purrr", "rlang", "tibble",
                "tidyselect", "vctrs",
            ],
        ),
        ("tibble", &["cli", "lifecycle", "magrittr", "pillar", "pkgconfig", "rlang", "vctrs"]),
        ("pillar", &["cli", "glue", "lifecycle", "rlang", "utf8", "vctrs"]),
        ("tidyselect", &["cli", "glue", "lifecycle", "rlang", "vctrs", "withr"]),
        ("purrr", &["cli", "lifecycle", "magrittr", "rlang", "vctrs"]),
        ("vctrs", &["cli", "glue", "lifecycle", "rlang"]),
        ("lifecycle", &["cli", "glue", "rlang"]),
        ("cli", &[]),
        ("generics", &[]),
        ("glue", &[]),
        ("magrittr", &[]),
        ("pkgconfig", &[]),
        ("R6", &[]),
        ("rlang", &[]),
        ("utf8", &[]),
        ("withr", &[]),
    ]);

    let resolution = resolve(&names(&["tidyr", "dplyr"]), &p).unwrap();
    assert_eq!(resolution.order.len(), 17);
    assert_dependencies_first(&p, &resolution.order);
    assert_eq!(resolution.order.last().map(String::as_str), Some("tidyr"));
}

#[test]
fn graph_contains_exactly_the_reachable_packages() {
    let p = provider(&[
        ("A", &["B"]),
        ("B", &[]),
        ("unrelated", &["B"]),
    ]);
    let graph = resolve_graph(&names(&["A"]), &p).unwrap();
    assert_eq!(graph.packages().collect::<Vec<_>>(), vec!["A", "B"]);
}

#[test]
fn duplicate_dependency_entries_collapse() {
    let p = provider(&[("A", &["B", "B", "C", "B"]), ("B", &[]), ("C", &[])]);
    let graph = resolve_graph(&names(&["A"]), &p).unwrap();
    assert_eq!(graph.dependencies_of("A").unwrap().len(), 2);
}

#[test]
fn unknown_transitive_dependency_fails_the_run() {
    let p = provider(&[("A", &["B"]), ("B", &["missing"])]);
    assert_eq!(
        resolve(&names(&["A"]), &p).unwrap_err(),
        ResolveError::UnknownPackage {
            name: "missing".to_string()
        }
    );
}

#[test]
fn cycle_path_names_its_members() {
    let p = provider(&[("A", &["B"]), ("B", &["C"]), ("C", &["A"])]);
    let Err(ResolveError::CycleDetected { path }) = resolve(&names(&["A"]), &p) else {
        panic!("expected a cycle");
    };
    assert_eq!(path.first(), path.last());
    assert_eq!(path.len(), 4);
    for member in ["A", "B", "C"] {
        assert!(path.iter().any(|p| p == member));
    }
}

#[test]
fn repeated_runs_are_identical() {
    let p = provider(&[
        ("z", &["m", "a"]),
        ("m", &["a", "b"]),
        ("a", &[]),
        ("b", &[]),
        ("q", &["b"]),
    ]);
    let roots = names(&["z", "q"]);
    let first = resolve(&roots, &p).unwrap();
    for _ in 0..10 {
        assert_eq!(resolve(&roots, &p).unwrap().order, first.order);
    }
    assert_eq!(first.order, vec!["a", "b", "m", "q", "z"]);
}

/// Acyclic graphs over `p0..pn`: every edge points at a lower index.
fn acyclic_graph() -> impl Strategy<Value = BTreeMap<PackageId, Vec<PackageId>>> {
    (1usize..40).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(any::<prop::sample::Index>(), 0..5), n)
            .prop_map(|picks| {
                picks
                    .into_iter()
                    .enumerate()
                    .map(|(i, deps)| {
                        let deps = if i == 0 {
                            Vec::new()
                        } else {
                            deps.iter().map(|d| format!("p{}", d.index(i))).collect()
                        };
                        (format!("p{i}"), deps)
                    })
                    .collect()
            })
    })
}

proptest! {
    #[test]
    fn acyclic_graphs_always_order(graph in acyclic_graph()) {
        let roots: Vec<PackageId> = graph.keys().cloned().collect();
        let resolution = resolve(&roots, &graph).unwrap();

        prop_assert_eq!(resolution.order.len(), graph.len());
        for (package, deps) in &graph {
            let at = position(&resolution.order, package);
            for dep in deps {
                prop_assert!(position(&resolution.order, dep) < at);
            }
        }
    }

    #[test]
    fn extra_dependency_is_rejected_only_when_it_closes_a_cycle(
        graph in acyclic_graph(),
        extra in any::<prop::sample::Index>(),
    ) {
        // Give p0 one more dependency. That closes a cycle exactly when the
        // new dependency already reaches p0.
        let target = format!("p{}", extra.index(graph.len()));
        let mut reaches_p0 = false;
        let mut stack = vec![target.clone()];
        let mut seen = HashSet::new();
        while let Some(p) = stack.pop() {
            if p == "p0" {
                reaches_p0 = true;
                break;
            }
            if seen.insert(p.clone()) {
                stack.extend(graph[&p].iter().cloned());
            }
        }

        let mut cyclic = graph;
        cyclic.entry("p0".to_string()).or_default().push(target);
        let roots: Vec<PackageId> = cyclic.keys().cloned().collect();
        let result = resolve(&roots, &cyclic);
        if reaches_p0 {
            let is_cycle = matches!(result, Err(ResolveError::CycleDetected { .. }));
            prop_assert!(is_cycle);
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
