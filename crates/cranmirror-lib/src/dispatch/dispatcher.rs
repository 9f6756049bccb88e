use super::types::JobOutcome;
use crate::fetch::Fetcher;
use crate::manifest::Job;
use crate::storage::Persister;
use std::sync::Arc;
use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, error, info, warn};

/// Runs download jobs concurrently, at most `concurrency_limit` of them past
/// the point of doing I/O at any moment.
pub struct Dispatcher<F> {
    fetcher: Arc<F>,
    persister: Persister,
    concurrency_limit: usize,
}

impl<F: Fetcher + 'static> Dispatcher<F> {
    pub fn new(fetcher: F, persister: Persister, concurrency_limit: usize) -> Self {
        Self::with_shared_fetcher(Arc::new(fetcher), persister, concurrency_limit)
    }

    pub fn with_shared_fetcher(
        fetcher: Arc<F>,
        persister: Persister,
        concurrency_limit: usize,
    ) -> Self {
        if concurrency_limit == 0 {
            warn!("Concurrency limit of 0 would never start a job, using 1");
        }
        Self {
            fetcher,
            persister,
            concurrency_limit: concurrency_limit.max(1),
        }
    }

    pub fn concurrency_limit(&self) -> usize {
        self.concurrency_limit
    }

    /// Processes every job and returns exactly one outcome per job, in
    /// completion order.
    pub async fn run(&self, jobs: Vec<Job>) -> Vec<JobOutcome> {
        let total = jobs.len();
        info!(jobs = total, concurrency = self.concurrency_limit, "Dispatching downloads");

        let semaphore = Arc::new(Semaphore::new(self.concurrency_limit));
        let (tx, mut rx) = mpsc::unbounded_channel();

        for job in jobs {
            let semaphore = semaphore.clone();
            let fetcher = self.fetcher.clone();
            let persister = self.persister.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                // Never closed while jobs are in flight.
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return;
                };
                let outcome = process_job(fetcher.as_ref(), &persister, job).await;
                // The collector stops listening only once every sender is gone.
                let _ = tx.send(outcome);
            });
        }
        drop(tx);

        let mut outcomes = Vec::with_capacity(total);
        while outcomes.len() < total {
            match rx.recv().await {
                Some(outcome) => outcomes.push(outcome),
                None => {
                    error!(
                        missing = total - outcomes.len(),
                        "Job tasks ended without reporting an outcome"
                    );
                    break;
                }
            }
        }
        outcomes
    }
}

async fn process_job<F: Fetcher>(fetcher: &F, persister: &Persister, job: Job) -> JobOutcome {
    if persister.exists(&job.file_name).await {
        if !job.overwrite {
            debug!(name = %job.file_name, "Already present, skipping download");
            return JobOutcome::existing(job);
        }
        debug!(name = %job.file_name, "Already present, overwriting");
    }

    let fetched = match fetcher.fetch(&job.urls).await {
        Ok(fetched) => fetched,
        Err(err) => return JobOutcome::failed(job, err),
    };

    if let Err(err) = persister.write(&job.file_name, fetched.body).await {
        return JobOutcome::failed(job, err);
    }

    info!(name = %job.file_name, url = %fetched.url, "Downloaded");
    JobOutcome::downloaded(job, fetched.url)
}
