use crate::fetch::FetchError;
use crate::manifest::Job;
use crate::storage::PersistError;
use thiserror::Error;

/// Why a job produced no file. Captured in its outcome, never propagated.
#[derive(Error, Debug)]
pub enum JobError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[derive(Debug)]
pub enum OutcomeStatus {
    Downloaded { url: String },
    AlreadyExisted,
    Failed(JobError),
}

/// Terminal result of one job.
#[derive(Debug)]
pub struct JobOutcome {
    pub job: Job,
    pub status: OutcomeStatus,
}

impl JobOutcome {
    pub fn downloaded(job: Job, url: String) -> Self {
        Self {
            job,
            status: OutcomeStatus::Downloaded { url },
        }
    }

    pub fn existing(job: Job) -> Self {
        Self {
            job,
            status: OutcomeStatus::AlreadyExisted,
        }
    }

    pub fn failed(job: Job, error: impl Into<JobError>) -> Self {
        Self {
            job,
            status: OutcomeStatus::Failed(error.into()),
        }
    }

    /// The candidate URL the file was downloaded from, if it was.
    pub fn resolved_url(&self) -> Option<&str> {
        match &self.status {
            OutcomeStatus::Downloaded { url } => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self.status, OutcomeStatus::Downloaded { .. })
    }

    pub fn already_existed(&self) -> bool {
        matches!(self.status, OutcomeStatus::AlreadyExisted)
    }

    pub fn error(&self) -> Option<&JobError> {
        match &self.status {
            OutcomeStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}
