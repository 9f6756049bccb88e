use crate::dispatch::JobOutcome;
use serde::Serialize;

/// Aggregate counts over the outcomes of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub successful_downloads: usize,
    /// Downloaded plus already present
    pub files_available: usize,
    pub errors: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[JobOutcome]) -> Self {
        outcomes.iter().fold(Self::default(), |mut summary, outcome| {
            if outcome.succeeded() {
                summary.successful_downloads += 1;
            }
            if outcome.succeeded() || outcome.already_existed() {
                summary.files_available += 1;
            }
            if outcome.error().is_some() {
                summary.errors += 1;
            }
            summary
        })
    }

    pub fn log(&self) {
        tracing::info!(
            downloads = self.successful_downloads,
            files = self.files_available,
            errors = self.errors,
            "results"
        );
    }
}
