//! Flat-file cache helpers.
//!
//! The player-directory cache is a single JSON file whose modification
//! time doubles as the freshness signal. No locking is applied: this is a
//! single-operator, single-process tool, and concurrent invocations racing
//! on the same file is a documented limitation rather than a supported case.

use std::{
    fs,
    io::{Read, Write},
    path::Path,
    time::{Duration, SystemTime},
};

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories as needed
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Age of the file at `path`, measured from its mtime to now.
///
/// Returns `None` when the file does not exist or its mtime is unreadable.
/// An mtime in the future clamps to zero age.
pub fn file_age(path: &Path) -> Option<Duration> {
    let mtime = fs::metadata(path).ok()?.modified().ok()?;
    Some(
        SystemTime::now()
            .duration_since(mtime)
            .unwrap_or(Duration::ZERO),
    )
}

/// Whether a cache entry of the given age is still usable.
///
/// The comparison is strict: an entry exactly as old as the window is
/// already stale and triggers a refetch.
pub fn is_fresh(age: Duration, window: Duration) -> bool {
    age < window
}
