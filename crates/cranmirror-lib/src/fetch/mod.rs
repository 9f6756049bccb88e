mod error;
mod fetcher;

pub use error::{FetchError, SourceFailure};
pub use fetcher::{FetchedFile, Fetcher, HttpFetcher};
