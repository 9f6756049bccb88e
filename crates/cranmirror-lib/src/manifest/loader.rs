use super::Job;
use crate::error::CranMirrorError;
use crate::utils::expand_home;

/// Reads the JSON job manifest at `manifest_path`, expanding a leading `~`.
pub fn load_manifest(manifest_path: &str) -> Result<Vec<Job>, CranMirrorError> {
    let path = expand_home(manifest_path);

    let content = std::fs::read(&path).map_err(|source| CranMirrorError::ManifestRead {
        path: path.clone(),
        source,
    })?;

    let jobs: Vec<Job> = serde_json::from_slice(&content)
        .map_err(|source| CranMirrorError::ManifestParse { path: path.clone(), source })?;

    tracing::debug!(manifest = %path.display(), jobs = jobs.len(), "Loaded manifest");
    Ok(jobs)
}
