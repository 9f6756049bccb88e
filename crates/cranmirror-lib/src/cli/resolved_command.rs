use crate::cli::args::Command;
use crate::cli::params::DownloadParams;
use crate::config::load_settings;
use crate::error::CranMirrorError;
use crate::manifest::load_manifest;
use crate::utils::expand_home;

/// Validates arguments, layers settings and loads the manifest.
pub fn resolve_command(command: Command) -> Result<DownloadParams, CranMirrorError> {
    let Command {
        manifest_path,
        root_dir,
        settings_path,
        concurrency_limit,
    } = command;

    if manifest_path.trim().is_empty() {
        return Err(CranMirrorError::CliArgumentValidation {
            details: "No manifest provided. Pass --jsonFile <FILE>.".to_string(),
        });
    }

    if concurrency_limit == Some(0) {
        return Err(CranMirrorError::CliArgumentValidation {
            details: "concurrency must be greater than 0.".to_string(),
        });
    }

    let mut settings = load_settings(settings_path.as_deref())?;
    if let Some(concurrency_limit) = concurrency_limit {
        settings.concurrency_limit = concurrency_limit;
    }
    if settings.concurrency_limit == 0 {
        return Err(CranMirrorError::CliArgumentValidation {
            details: "concurrency_limit must be greater than 0.".to_string(),
        });
    }

    tracing::info!("Loading manifest from {}", manifest_path);
    let jobs = load_manifest(&manifest_path)?;

    Ok(DownloadParams {
        jobs,
        root_dir: expand_home(&root_dir),
        settings,
    })
}
