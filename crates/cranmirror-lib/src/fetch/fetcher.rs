use super::error::{FetchError, SourceFailure};
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use tracing::{debug, trace};

/// A fully read response body and the candidate URL that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedFile {
    pub url: String,
    pub body: Bytes,
}

/// Retrieves a file from the first candidate URL that serves it.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, urls: &[String]) -> impl Future<Output = Result<FetchedFile, FetchError>> + Send;
}

#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(Client::builder().build()?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, urls: &[String]) -> Result<FetchedFile, FetchError> {
        let mut attempts = Vec::new();

        for url in urls {
            trace!(url = %url, "Requesting");
            let response = match self.client.get(url.as_str()).send().await {
                Ok(response) => response,
                Err(source) => {
                    debug!(url = %url, error = %source, "Request failed, trying next candidate");
                    attempts.push(SourceFailure::Transport {
                        url: url.clone(),
                        source,
                    });
                    continue;
                }
            };

            let status = response.status();
            if status != StatusCode::OK {
                debug!(url = %url, status = %status, "Unexpected status, trying next candidate");
                drop(response);
                attempts.push(SourceFailure::BadStatus {
                    url: url.clone(),
                    status,
                });
                continue;
            }

            // A broken body on a 200 is a transport problem, not a bad mirror.
            let body = response
                .bytes()
                .await
                .map_err(|source| FetchError::BodyRead {
                    url: url.clone(),
                    source,
                })?;

            debug!(url = %url, bytes = body.len(), "Fetched");
            return Ok(FetchedFile {
                url: url.clone(),
                body,
            });
        }

        Err(FetchError::NoSuitableSource { attempts })
    }
}
