use super::Persister;
use crate::error::CranMirrorError;
use futures::future::try_join_all;
use std::path::PathBuf;

/// Subdirectories of a CRAN-like repository that are always created under the
/// download root. Job file names are expected to carry one of these prefixes.
pub const LAYOUT_DIRS: [&str; 5] = [
    "src/contrib",
    "bin/macosx/el-capitan/contrib/3.5",
    "bin/macosx/el-capitan/contrib/3.6",
    "bin/windows/contrib/3.5",
    "bin/windows/contrib/3.6",
];

/// Creates every layout directory. Safe to call repeatedly.
pub async fn prepare_layout(persister: &Persister) -> Result<(), CranMirrorError> {
    try_join_all(LAYOUT_DIRS.into_iter().map(|dir| async move {
        persister
            .create_dir(dir)
            .await
            .map_err(|e| CranMirrorError::DirectoryCreation {
                path: PathBuf::from(dir),
                reason: e.to_string(),
            })
    }))
    .await?;

    tracing::debug!(dirs = LAYOUT_DIRS.len(), "Repository layout ready");
    Ok(())
}
