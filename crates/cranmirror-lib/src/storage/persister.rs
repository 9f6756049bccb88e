use super::error::PersistError;
use crate::error::CranMirrorError;
use bytes::Bytes;
use opendal::layers::TracingLayer;
use opendal::services::{Fs, Memory};
use opendal::{ErrorKind, Operator};
use std::path::Path;

/// Existence checks and writes against a storage backend, with every path
/// relative to the backend's root.
#[derive(Clone, Debug)]
pub struct Persister {
    op: Operator,
}

impl Persister {
    pub fn new(op: Operator) -> Self {
        Self { op }
    }

    /// Filesystem backend rooted at `root`, which is created if missing.
    pub fn for_root(root: impl AsRef<Path>) -> Result<Self, CranMirrorError> {
        let root = root.as_ref();
        std::fs::create_dir_all(root).map_err(|e| CranMirrorError::DirectoryCreation {
            path: root.to_path_buf(),
            reason: e.to_string(),
        })?;

        let builder = Fs::default().root(&root.to_string_lossy());
        let op = Operator::new(builder)?.layer(TracingLayer).finish();
        Ok(Self::new(op))
    }

    pub fn in_memory() -> Result<Self, CranMirrorError> {
        let op = Operator::new(Memory::default())?.layer(TracingLayer).finish();
        Ok(Self::new(op))
    }

    #[cfg(test)]
    fn operator(&self) -> &Operator {
        &self.op
    }

    /// Whether a regular file is present at `path`.
    pub async fn exists(&self, path: &str) -> bool {
        match self.op.stat(path).await {
            Ok(metadata) => metadata.mode().is_file(),
            Err(err) if err.kind() == ErrorKind::NotFound => false,
            Err(err) => {
                tracing::debug!(path, error = %err, "Could not stat destination, treating as absent");
                false
            }
        }
    }

    /// Creates or truncates `path` with exactly `body`.
    pub async fn write(&self, path: &str, body: Bytes) -> Result<(), PersistError> {
        self.op
            .write(path, body)
            .await
            .map(|_| ())
            .map_err(|source| PersistError::WriteFailure {
                path: path.to_string(),
                source,
            })
    }

    /// Recursively creates `path`; an existing directory is not an error.
    pub async fn create_dir(&self, path: &str) -> Result<(), PersistError> {
        let dir = format!("{}/", path.trim_end_matches('/'));
        self.op
            .create_dir(&dir)
            .await
            .map_err(|source| PersistError::CreateDir { path: dir, source })
    }
}
