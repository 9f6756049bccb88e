use serde::{Deserialize, Serialize};

/// One requested file: where to get it and where to put it.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Job {
    /// Candidate source URLs, highest priority first
    #[serde(rename = "url", default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    /// Destination path relative to the download root
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub file_name: String,
    /// Replace the destination even if it already exists
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub overwrite: bool,
}

impl Job {
    pub fn new(urls: impl IntoIterator<Item = impl Into<String>>, file_name: impl Into<String>) -> Self {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
            file_name: file_name.into(),
            overwrite: false,
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}
