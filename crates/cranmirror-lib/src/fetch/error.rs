use reqwest::StatusCode;
use thiserror::Error;

/// Why a single candidate URL was passed over.
#[derive(Error, Debug)]
pub enum SourceFailure {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    BadStatus { url: String, status: StatusCode },
}

impl SourceFailure {
    pub fn url(&self) -> &str {
        match self {
            SourceFailure::Transport { url, .. } | SourceFailure::BadStatus { url, .. } => url,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, SourceFailure::Transport { .. })
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("error reading response body from {url}: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "no suitable url found after {} attempt(s), last error: {}",
        .attempts.len(),
        describe_last_transport_error(.attempts)
    )]
    NoSuitableSource { attempts: Vec<SourceFailure> },
}

impl FetchError {
    /// The most recent transport-level failure of an exhausted candidate list.
    /// Status failures carry no transport error and are skipped.
    pub fn last_transport_error(&self) -> Option<&SourceFailure> {
        match self {
            FetchError::NoSuitableSource { attempts } => last_transport_failure(attempts),
            FetchError::BodyRead { .. } => None,
        }
    }
}

fn last_transport_failure(attempts: &[SourceFailure]) -> Option<&SourceFailure> {
    attempts.iter().rev().find(|attempt| attempt.is_transport())
}

fn describe_last_transport_error(attempts: &[SourceFailure]) -> String {
    last_transport_failure(attempts).map_or_else(|| "none".to_string(), ToString::to_string)
}
