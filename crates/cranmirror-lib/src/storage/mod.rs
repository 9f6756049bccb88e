mod error;
mod layout;
mod persister;

pub use error::PersistError;
pub use layout::{LAYOUT_DIRS, prepare_layout};
pub use persister::Persister;
