//! Process setup: resolve the data directory and open the store.
//!
//! Failures here are fatal for the binary; everything past this point is an
//! ordinary per-command error.

use crate::error::Result;
use crate::store::Store;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::{env, fs};

/// Overrides the default data directory (also what makes the binary
/// testable end to end).
pub const DATA_DIR_ENV: &str = "NOTZ_DATA_DIR";

const DB_FILENAME: &str = "notz.db";

/// The directory holding the database file.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let dirs = ProjectDirs::from("com", "notz", "notz")
        .ok_or_else(|| std::io::Error::other("could not determine a data directory"))?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Open (creating if needed) the database and its fixed collections.
pub fn open_store() -> Result<Store> {
    let dir = data_dir()?;
    fs::create_dir_all(&dir)?;
    Store::open(&dir.join(DB_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_var_overrides_data_dir() {
        let temp = tempfile::tempdir().unwrap();
        env::set_var(DATA_DIR_ENV, temp.path());
        let dir = data_dir().unwrap();
        env::remove_var(DATA_DIR_ENV);
        assert_eq!(dir, temp.path());
    }
}
