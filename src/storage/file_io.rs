//! JSON file helpers for the repositories
//!
//! Data files are serialized in full before anything touches the disk, then
//! swapped in with a rename so a reader sees the old file or the new one.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetAlertsError;

fn storage_error(action: &str, path: &Path, err: impl Display) -> BudgetAlertsError {
    BudgetAlertsError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Sibling of `path` that receives the pending contents
fn staging_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

/// Load a data file; a file that was never written yields `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, BudgetAlertsError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("read", path, e)),
    };

    serde_json::from_slice(&bytes).map_err(|e| storage_error("parse", path, e))
}

/// Replace a data file with the pretty-printed JSON of `data`
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetAlertsError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = serde_json::to_vec_pretty(data).map_err(|e| storage_error("serialize", path, e))?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory", dir, e))?;
    }

    let staged = staging_path(path);
    let result = File::create(&staged)
        .and_then(|mut file| {
            file.write_all(&contents)?;
            file.sync_all()
        })
        .map_err(|e| storage_error("write", &staged, e))
        .and_then(|()| fs::rename(&staged, path).map_err(|e| storage_error("replace", path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&staged);
    }
    result
}
