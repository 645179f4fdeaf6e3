use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::backend::DocumentBackend;
use crate::error::{PostboxError, Result};

/// File-based backend. The whole post collection lives in a single JSON
/// document at `path`.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PostboxError::Io)?;
            }
        }
        Ok(())
    }
}

impl DocumentBackend for FsBackend {
    fn load_document(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PostboxError::Io(err)),
        }
    }

    fn store_document(&self, text: &str) -> Result<()> {
        self.ensure_parent_dir()?;

        // Write to a temp file, then rename over the document. A reader
        // never observes a half-written document.
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        let tmp_file = dir.join(format!(".posts-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, text).map_err(PostboxError::Io)?;
        fs::rename(&tmp_file, &self.path).map_err(PostboxError::Io)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("posts.json"));
        assert!(backend.load_document().unwrap().is_none());
    }

    #[test]
    fn stored_document_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("posts.json"));

        backend.store_document("[]").unwrap();
        assert_eq!(backend.load_document().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn store_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("nested/deeper/posts.json"));

        backend.store_document("[]").unwrap();
        assert_eq!(backend.load_document().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn store_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FsBackend::new(dir.path().join("posts.json"));

        backend.store_document("[]").unwrap();
        backend.store_document("[1]").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("posts.json")]);
    }
}
