//! Durable client-side key-value storage
//!
//! The trait mirrors the browser `Storage` interface so the same session code
//! runs against `localStorage` in the front-end and against a file natively.

use crate::error::{CoreError, CoreResult};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// String key-value storage that survives reloads
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> CoreResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Removing a missing key is not an error
    fn remove_item(&self, key: &str) -> CoreResult<()>;
}

/// In-process storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> CoreResult<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| CoreError::storage_error("memory storage lock poisoned"))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> CoreResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::KeyValueStorage;
    use crate::error::{CoreError, CoreResult};
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Storage persisted as a single JSON object file.
    ///
    /// Every mutation rewrites the whole file through a temporary sibling and a
    /// rename, so a crash never leaves a half-written document behind.
    #[derive(Debug)]
    pub struct FileStorage {
        path: PathBuf,
        // Serializes read-modify-write cycles within this process
        guard: Mutex<()>,
    }

    impl FileStorage {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self {
                path: path.into(),
                guard: Mutex::new(()),
            }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read(&self) -> CoreResult<BTreeMap<String, String>> {
            match std::fs::read_to_string(&self.path) {
                Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
                Ok(contents) => Ok(serde_json::from_str(&contents)?),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(e) => Err(e.into()),
            }
        }

        fn write(&self, items: &BTreeMap<String, String>) -> CoreResult<()> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let tmp = self.path.with_extension("tmp");
            std::fs::write(&tmp, serde_json::to_vec_pretty(items)?)?;
            std::fs::rename(&tmp, &self.path)?;
            Ok(())
        }

        fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> bool) -> CoreResult<()> {
            let _guard = self
                .guard
                .lock()
                .map_err(|_| CoreError::storage_error("file storage lock poisoned"))?;
            let mut items = self.read()?;
            if f(&mut items) {
                self.write(&items)?;
            }
            Ok(())
        }
    }

    impl KeyValueStorage for FileStorage {
        fn get_item(&self, key: &str) -> CoreResult<Option<String>> {
            Ok(self.read()?.remove(key))
        }

        fn set_item(&self, key: &str, value: &str) -> CoreResult<()> {
            self.modify(|items| {
                items.insert(key.to_string(), value.to_string());
                true
            })
        }

        fn remove_item(&self, key: &str) -> CoreResult<()> {
            self.modify(|items| items.remove(key).is_some())
        }
    }
}
