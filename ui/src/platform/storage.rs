//! Durable `KeyValueStore` backends.

use crate::core::storage::{KeyValueStore, StorageError};

#[cfg(target_arch = "wasm32")]
pub type PageStore = LocalStorage;
#[cfg(not(target_arch = "wasm32"))]
pub type PageStore = FileStore;

/// `window.localStorage`. A missing storage (private mode, sandboxed frame)
/// turns every call into `StorageError::Unavailable`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            tracing::warn!("localStorage unavailable; progress will not persist");
        }
        Self { inner }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner
            .as_ref()
            .ok_or(StorageError::Unavailable("localStorage"))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }
}

/// One `<key>.json` file per key under the project data directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn open() -> Self {
        let dir = directories::ProjectDirs::from("id", "EduKreasi", "EduKreasi")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("edukreasi"));
        Self { dir }
    }

    pub fn in_dir(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path(key), value)?;
        Ok(())
    }
}
