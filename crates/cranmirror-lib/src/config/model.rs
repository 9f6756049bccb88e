use serde::{Deserialize, Serialize};

pub const DEFAULT_CONCURRENCY_LIMIT: usize = 30;

fn default_concurrency_limit() -> usize {
    DEFAULT_CONCURRENCY_LIMIT
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Maximum number of jobs allowed in their fetch/write phase at once
    #[serde(default = "default_concurrency_limit")]
    pub concurrency_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
        }
    }
}
