//! Handler for `cranlock lock`.

use std::path::PathBuf;

use miette::Result;

use cranlock_ops::ops_lock::{self, LockOptions};
use cranlock_ops::Overrides;

pub async fn exec(
    package_file: PathBuf,
    image: Option<String>,
    version_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
    overrides: &Overrides,
) -> Result<()> {
    let opts = LockOptions {
        package_file,
        image,
        version_file,
        output_file,
    };
    ops_lock::lock(&opts, overrides).await?;
    Ok(())
}
