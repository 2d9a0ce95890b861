//! Handler for `cranlock tree`.

use std::path::Path;

use miette::Result;

use cranlock_ops::ops_tree::{self, TreeOptions};
use cranlock_ops::Overrides;

pub async fn exec(
    package_file: &Path,
    depth: Option<u32>,
    why: Option<String>,
    overrides: &Overrides,
) -> Result<()> {
    let opts = TreeOptions {
        depth: depth.map(|d| d as usize),
        why,
    };
    ops_tree::tree(package_file, &opts, overrides).await
}
