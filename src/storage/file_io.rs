//! Whole-file JSON reads and crash-safe writes
//!
//! The store is rewritten in full on every change. Writes land in a sibling
//! `.tmp` file that is synced and then renamed over the target, so a reader
//! sees either the old document or the new one.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

fn storage_err(action: &str, path: &Path, e: impl std::fmt::Display) -> BudgetError {
    BudgetError::Storage(format!("{} {}: {}", action, path.display(), e))
}

/// Read a JSON document
///
/// A missing or zero-length file yields `T::default()`; anything else that
/// does not parse is a storage error.
pub fn read_json<T, P>(path: P) -> Result<T, BudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_err("cannot read", path, e)),
    };

    if text.trim().is_empty() {
        return Ok(T::default());
    }

    serde_json::from_str(&text).map_err(|e| storage_err("cannot parse", path, e))
}

/// Replace `path` with `data` serialized as pretty JSON
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut bytes = serde_json::to_vec_pretty(data).map_err(|e| storage_err("cannot encode", path, e))?;
    bytes.push(b'\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("cannot create", parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let written = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        });

    if let Err(e) = written.and_then(|()| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_err("cannot write", path, e));
    }

    Ok(())
}

/// Sibling temp file, e.g. `store.json` -> `store.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    type Doc = BTreeMap<String, f64>;

    #[test]
    fn test_missing_and_empty_files_read_as_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let doc: Doc = read_json(&path).unwrap();
        assert!(doc.is_empty());

        fs::write(&path, "  \n").unwrap();
        let doc: Doc = read_json(&path).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut doc = Doc::new();
        doc.insert("remaining_budget".into(), 82.14);
        write_json_atomic(&path, &doc).unwrap();

        let loaded: Doc = read_json(&path).unwrap();
        assert_eq!(loaded, doc);
        assert!(!temp_dir.path().join("store.json.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("store.json");

        write_json_atomic(&path, &Doc::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "not json at all").unwrap();

        let result: Result<Doc, _> = read_json(&path);
        assert!(matches!(result, Err(BudgetError::Storage(_))));
    }

    #[test]
    fn test_temp_path() {
        assert_eq!(
            temp_path_for(Path::new("/data/store.json")),
            PathBuf::from("/data/store.json.tmp")
        );
    }
}
