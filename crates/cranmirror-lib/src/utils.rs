use std::path::{Path, PathBuf};

/// Expands a leading `~` to the current user's home directory.
///
/// Only the bare `~` and `~/...` forms are expanded; `~user` is left alone, as
/// is any path when the home directory cannot be determined.
pub fn expand_home(path: &str) -> PathBuf {
    expand_home_with(path, dirs::home_dir().as_deref())
}

fn expand_home_with(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home.to_path_buf();
    }

    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}
