use super::Settings;
use crate::error::CranMirrorError;
use config::{Config as ConfigBuilder, Environment, File};

pub const ENV_PREFIX: &str = "CRANMIRROR";

/// Layers built-in defaults, an optional settings file and `CRANMIRROR_*`
/// environment variables, in that order of precedence.
pub fn load_settings(settings_path: Option<&str>) -> Result<Settings, CranMirrorError> {
    load_settings_from(settings_path, Environment::with_prefix(ENV_PREFIX))
}

fn load_settings_from(
    settings_path: Option<&str>,
    environment: Environment,
) -> Result<Settings, CranMirrorError> {
    let mut builder = ConfigBuilder::builder();
    if let Some(settings_path) = settings_path {
        builder = builder.add_source(File::with_name(settings_path));
    }

    let config_builder = builder
        .add_source(environment.try_parsing(true))
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}
