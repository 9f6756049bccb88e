pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod fetch;
pub mod manifest;
pub mod storage;
pub mod summary;
pub mod utils;

pub use crate::config::Settings;
pub use dispatch::{Dispatcher, JobError, JobOutcome, OutcomeStatus};
pub use error::CranMirrorError;
pub use fetch::{FetchError, FetchedFile, Fetcher, HttpFetcher, SourceFailure};
pub use manifest::Job;
pub use storage::{LAYOUT_DIRS, PersistError, Persister, prepare_layout};
pub use summary::RunSummary;
