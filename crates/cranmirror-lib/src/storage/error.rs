use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("failed to write {path}: {source}")]
    WriteFailure {
        path: String,
        #[source]
        source: opendal::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: opendal::Error,
    },
}
