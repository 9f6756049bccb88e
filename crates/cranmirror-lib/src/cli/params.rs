use crate::config::Settings;
use crate::manifest::Job;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DownloadParams {
    pub jobs: Vec<Job>,
    pub root_dir: PathBuf,
    pub settings: Settings,
}
