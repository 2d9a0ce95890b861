//! Handler for `cranlock versions`.

use std::path::Path;

use miette::Result;

pub fn exec(image: &str, output: &Path) -> Result<()> {
    cranlock_ops::ops_versions::versions(image, output)?;
    Ok(())
}
