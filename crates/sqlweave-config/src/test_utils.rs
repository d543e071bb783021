use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// Writes `content` to `sqlweave.toml` inside a fresh temporary directory.
///
/// The directory is removed when the returned guard is dropped.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sqlweave.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

pub fn with_env<F>(vars: Vec<(&str, &str)>, f: F)
where
    F: FnOnce(),
{
    let old_vars: Vec<_> = vars
        .iter()
        .map(|(k, _)| (*k, std::env::var(k).ok()))
        .collect();

    for (key, value) in &vars {
        std::env::set_var(key, value);
    }

    f();

    for (key, old_value) in old_vars {
        match old_value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }
}
