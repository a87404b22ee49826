// tests/common/temp.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Scratch directory for dictionary files, removed on drop.
#[derive(Debug)]
pub struct TempDir {
    inner: tempfile::TempDir,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let inner = tempfile::Builder::new().prefix(prefix).tempdir().unwrap();
        Self { inner }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.inner.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}
