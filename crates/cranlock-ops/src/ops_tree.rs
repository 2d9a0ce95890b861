//! Operation: display the dependency tree of a package file.

use std::path::Path;

use cranlock_core::config::GlobalConfig;
use cranlock_core::packages::PackageList;
use cranlock_resolver::graph::DependencyGraph;
use cranlock_util::errors::CranlockError;

use crate::Overrides;

/// Options for `cranlock tree`.
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    /// Maximum tree depth to display.
    pub depth: Option<usize>,
    /// Show how this package is reached instead of the whole tree.
    pub why: Option<String>,
}

/// Resolve the packages in `package_file` and print their dependency tree.
pub async fn tree(
    package_file: &Path,
    opts: &TreeOptions,
    overrides: &Overrides,
) -> miette::Result<()> {
    let config = crate::load_config(overrides)?;
    let output = tree_with_config(package_file, opts, &config).await?;
    print!("{output}");
    Ok(())
}

/// Resolve and render the tree output without printing it.
pub async fn tree_with_config(
    package_file: &Path,
    opts: &TreeOptions,
    config: &GlobalConfig,
) -> miette::Result<String> {
    if !package_file.is_file() {
        return Err(CranlockError::Input {
            message: format!("{} does not exist", package_file.display()),
        }
        .into());
    }
    let packages = PackageList::from_path(package_file)?;

    let sp = cranlock_util::progress::spinner("Resolving dependencies...");
    let resolution = crate::resolve_packages(config, &packages).await;
    sp.finish_and_clear();
    let resolution = resolution?;

    Ok(render(&resolution.graph, packages.as_slice(), opts))
}

/// Render either the full tree or, with `why`, the path to one package.
pub fn render(graph: &DependencyGraph, roots: &[String], opts: &TreeOptions) -> String {
    if let Some(target) = &opts.why {
        return match graph.find_path(roots, target) {
            Some(path) => {
                let mut out = format!("Path to {target}:\n");
                for (i, node) in path.iter().enumerate() {
                    let indent = "  ".repeat(i);
                    out.push_str(&format!("{indent}{node}\n"));
                }
                let dependents = graph.dependents_of(target);
                if !dependents.is_empty() {
                    out.push_str(&format!("Required by: {}\n", dependents.join(", ")));
                }
                out
            }
            None => format!("Package '{target}' not found in the graph.\n"),
        };
    }

    let mut out = graph.print_tree(roots, opts.depth);
    out.push_str(&format!(
        "\n{} packages, {} dependency edges\n",
        graph.len(),
        graph.edge_count()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DependencyGraph {
        let mut g = DependencyGraph::new();
        g.add_edge("dplyr", "rlang");
        g.add_edge("dplyr", "tibble");
        g.add_edge("tibble", "pillar");
        g.add_edge("pillar", "rlang");
        g
    }

    fn roots() -> Vec<String> {
        vec!["dplyr".to_string()]
    }

    #[test]
    fn renders_full_tree_with_summary() {
        let out = render(&sample(), &roots(), &TreeOptions::default());
        assert!(out.starts_with("dplyr\n├── rlang\n└── tibble\n"));
        assert!(out.ends_with("4 packages, 4 dependency edges\n"));
    }

    #[test]
    fn depth_limits_output() {
        let opts = TreeOptions {
            depth: Some(1),
            why: None,
        };
        let out = render(&sample(), &roots(), &opts);
        assert!(!out.contains("pillar"));
    }

    #[test]
    fn why_prints_path() {
        let opts = TreeOptions {
            depth: None,
            why: Some("pillar".to_string()),
        };
        let out = render(&sample(), &roots(), &opts);
        assert_eq!(
            out,
            "Path to pillar:\ndplyr\n  tibble\n    pillar\nRequired by: tibble\n"
        );
    }

    #[test]
    fn why_lists_every_direct_dependent() {
        let opts = TreeOptions {
            depth: None,
            why: Some("rlang".to_string()),
        };
        let out = render(&sample(), &roots(), &opts);
        assert!(out.starts_with("Path to rlang:\ndplyr\n  rlang\n"));
        assert!(out.ends_with("Required by: dplyr, pillar\n"));
    }

    #[test]
    fn why_root_has_no_dependents_line() {
        let opts = TreeOptions {
            depth: None,
            why: Some("dplyr".to_string()),
        };
        let out = render(&sample(), &roots(), &opts);
        assert_eq!(out, "Path to dplyr:\ndplyr\n");
    }

    #[test]
    fn why_unknown_package() {
        let opts = TreeOptions {
            depth: None,
            why: Some("shiny".to_string()),
        };
        let out = render(&sample(), &roots(), &opts);
        assert!(out.contains("not found"));
    }
}
