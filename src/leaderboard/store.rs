//! JSON file store for leaderboard entries

use super::LeaderboardEntry;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub(super) enum ReadError {
    #[error("store does not exist")]
    Missing,
    #[error("failed to read store: {0}")]
    Io(#[from] io::Error),
    #[error("store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub(super) fn read(path: &Path) -> Result<Vec<LeaderboardEntry>, ReadError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ReadError::Missing),
        Err(e) => return Err(e.into()),
    };

    // An empty file is what an interrupted first save leaves behind
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(&content)?)
}

/// Write entries with file locking and an atomic rename
///
/// The lock lives in a sibling `.lock` file and is released when its handle
/// drops, on every return path.
pub(super) fn write(path: &Path, entries: &[LeaderboardEntry]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(entries).map_err(io::Error::other)?;

    let lock_path = path.with_extension("json.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)?;
    lock_file.lock_exclusive()?;

    let temp_path = path.with_extension("json.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.sync_all()?;
    drop(temp_file);

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}
