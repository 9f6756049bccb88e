use cranmirror_lib::fetch::{FetchError, FetchedFile, Fetcher, SourceFailure};
use cranmirror_lib::manifest::Job;
use eyre::Result;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::debug;

/// In-process fetcher serving canned bodies by URL. Unknown URLs count as
/// 404s. Records how often it was called and how many fetches overlapped.
#[derive(Debug, Default)]
pub struct StubFetcher {
    bodies: HashMap<String, Vec<u8>>,
    delay: Option<Duration>,
    gate: Option<Arc<Semaphore>>,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serving(mut self, url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.into(), body.into());
        self
    }

    /// Every fetch holds its slot for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every fetch waits for a permit from `gate` before answering. Permits
    /// are consumed, so each released permit lets exactly one fetch finish.
    pub fn with_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Fetcher for StubFetcher {
    async fn fetch(&self, urls: &[String]) -> Result<FetchedFile, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);
        debug!(in_flight, candidates = urls.len(), "Stub fetch started");

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let mut attempts = Vec::new();
        for url in urls {
            match self.bodies.get(url) {
                Some(body) => {
                    return Ok(FetchedFile {
                        url: url.clone(),
                        body: body.clone().into(),
                    });
                }
                None => attempts.push(SourceFailure::BadStatus {
                    url: url.clone(),
                    status: StatusCode::NOT_FOUND,
                }),
            }
        }
        Err(FetchError::NoSuitableSource { attempts })
    }
}

/// Serves a 200 that promises more body than it sends, then hangs up.
pub async fn spawn_truncated_body_server() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 1024\r\nConnection: close\r\n\r\npartial")
                .await;
            let _ = socket.shutdown().await;
        }
    });

    Ok(format!("http://{addr}/src/contrib/truncated_1.0.tar.gz"))
}

/// A URL nothing listens on.
pub fn unreachable_url(name: &str) -> String {
    format!("http://127.0.0.1:1/{name}")
}

pub fn write_manifest(dir: &Path, jobs: &[Job]) -> Result<PathBuf> {
    let manifest_path = dir.join("jobs.json");
    std::fs::write(&manifest_path, serde_json::to_string_pretty(jobs)?)?;
    Ok(manifest_path)
}

/// A scratch directory holding a `jobs.json` manifest for `jobs`.
pub fn setup_test_environment(jobs: &[Job]) -> Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let manifest_path = write_manifest(temp_dir.path(), jobs)?;
    debug!(manifest = %manifest_path.display(), jobs = jobs.len(), "Prepared test environment");
    Ok((temp_dir, manifest_path))
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("cranmirror_lib=debug,cranmirror_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
