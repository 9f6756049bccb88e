mod loader;
mod model;

pub use loader::{ENV_PREFIX, load_settings};
pub use model::{DEFAULT_CONCURRENCY_LIMIT, Settings};
