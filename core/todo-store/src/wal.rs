//! Reopening a database after an unclean shutdown.

use crate::StoreResult;
use std::path::{Path, PathBuf};
use tracing::warn;

/// The write-ahead log DuckDB keeps next to a database file.
pub fn wal_path(db_path: &Path) -> PathBuf {
    let mut wal = db_path.as_os_str().to_owned();
    wal.push(".wal");
    PathBuf::from(wal)
}

/// Opens a DuckDB file, discarding a leftover WAL if it blocks the open.
pub fn open_duckdb_with_wal_recovery(path: &Path) -> StoreResult<duckdb::Connection> {
    open_with_wal_recovery(path, |p| Ok(duckdb::Connection::open(p)?))
}

/// Runs `open` once. If it fails while a WAL sits next to `path`, the WAL is
/// removed and `open` gets exactly one more attempt. Without a WAL, or when
/// the WAL cannot be removed, the first error is returned.
pub fn open_with_wal_recovery<T, F>(path: &Path, mut open: F) -> StoreResult<T>
where
    F: FnMut(&Path) -> StoreResult<T>,
{
    let first_err = match open(path) {
        Ok(handle) => return Ok(handle),
        Err(e) => e,
    };

    let wal = wal_path(path);
    if !wal.is_file() {
        return Err(first_err);
    }

    warn!(wal = %wal.display(), error = %first_err, "Open failed, discarding stale WAL and retrying");
    if let Err(e) = std::fs::remove_file(&wal) {
        warn!(wal = %wal.display(), error = %e, "Could not remove stale WAL");
        return Err(first_err);
    }
    open(path)
}
