use crate::cli::DownloadParams;
use crate::dispatch::{Dispatcher, JobOutcome};
use crate::error::CranMirrorError;
use crate::fetch::{Fetcher, HttpFetcher};
use crate::manifest::Job;
use crate::storage::{Persister, prepare_layout};
use crate::summary::RunSummary;

pub async fn run_download(params: DownloadParams) -> Result<RunSummary, CranMirrorError> {
    let DownloadParams {
        jobs,
        root_dir,
        settings,
    } = params;

    tracing::info!("Preparing download directory {}", root_dir.display());
    let persister = Persister::for_root(&root_dir)?;
    prepare_layout(&persister).await?;

    let fetcher = HttpFetcher::new()?;
    Ok(download_all(fetcher, persister, jobs, settings.concurrency_limit).await)
}

/// Dispatches `jobs`, reports each failure and the aggregate counts.
pub async fn download_all<F: Fetcher + 'static>(
    fetcher: F,
    persister: Persister,
    jobs: Vec<Job>,
    concurrency_limit: usize,
) -> RunSummary {
    let dispatcher = Dispatcher::new(fetcher, persister, concurrency_limit);
    let outcomes = dispatcher.run(jobs).await;

    report_failures(&outcomes);

    let summary = RunSummary::from_outcomes(&outcomes);
    summary.log();
    summary
}

fn report_failures(outcomes: &[JobOutcome]) {
    for outcome in outcomes {
        if let Some(err) = outcome.error() {
            tracing::warn!(
                error = %err,
                urls = %outcome.job.urls.join("||"),
                name = %outcome.job.file_name,
                "no suitable download"
            );
        }
    }
}
