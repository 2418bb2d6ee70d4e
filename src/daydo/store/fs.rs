use super::StorageBackend;
use crate::error::{DaydoError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage: each key is a file directly under `root`.
///
/// Keys are the fixed constants in [`super`], so they are always valid file
/// names. The directory is created lazily on first write.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(DaydoError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(DaydoError::Io)?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write: tmp then rename, so a crash never leaves a
        // half-written value under the real key.
        let tmp_path = self.root.join(format!(".{}.tmp", key));
        fs::write(&tmp_path, value).map_err(DaydoError::Io)?;
        fs::rename(&tmp_path, self.key_path(key)).map_err(DaydoError::Io)?;

        Ok(())
    }
}
