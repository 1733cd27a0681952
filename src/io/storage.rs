use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// Storage slot for the serialized todo collection.
pub const TODOS_KEY: &str = "todos-v1";
/// Storage slot for the theme preference ("light" / "dark").
pub const THEME_KEY: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("cannot write key {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// Opaque key-value persistence boundary. Values are UTF-8 text; what
/// they encode is the caller's business.
///
/// `read` returns None for never-written, unreadable, or unavailable
/// slots. `write` is best-effort: callers keep in-memory state
/// authoritative and treat an error as "persistence unavailable this
/// cycle".
pub trait Storage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// One file per key inside the data directory. Writes go through a temp
/// file in the same directory and a rename, so a crash mid-write leaves
/// the previous value intact.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key)).ok()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let wrap = |source: std::io::Error| StorageError::Write {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(wrap)?;
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(wrap)?;
        tmp.write_all(value.as_bytes()).map_err(wrap)?;
        tmp.persist(self.dir.join(key))
            .map(|_| ())
            .map_err(|e| wrap(e.error))
    }
}
