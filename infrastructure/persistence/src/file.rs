use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::storage::{KeyValueStorage, StorageError, check_quota};

const EXTENSION: &str = "json";

/// Side-store keeping one file per key under a directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous value readable.
pub struct FileStorage {
    dir: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileStorage {
    /// Opens (creating if needed) the storage directory.
    pub fn open(dir: impl AsRef<Path>, quota_bytes: Option<usize>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        debug!("File storage opened at {}", dir.display());
        Ok(Self { dir, quota_bytes })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.{}", key, EXTENSION)))
    }

    /// Bytes used by every stored key except `key`.
    fn used_by_others(&self, key: &str) -> Result<usize, StorageError> {
        let own = format!("{}.{}", key, EXTENSION);
        let mut used = 0;
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let Some(stem) = name.strip_suffix(&format!(".{}", EXTENSION)) else {
                continue;
            };
            if name == own {
                continue;
            }
            used += stem.len() + entry.metadata()?.len() as usize;
        }
        Ok(used)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if self.quota_bytes.is_some() {
            let needed = self.used_by_others(key)? + key.len() + value.len();
            check_quota(key, needed, self.quota_bytes)?;
        }

        let tmp = path.with_extension(format!("{}.tmp", EXTENSION));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!("Stored {} bytes under {}", value.len(), key);
        Ok(())
    }
}
