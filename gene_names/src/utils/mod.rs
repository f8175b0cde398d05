pub mod get_args;
pub mod reconcile;
pub mod unmatched;

use std::path::{Path, PathBuf};

/// `prefix` with `suffix` appended to its file name.
pub fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
