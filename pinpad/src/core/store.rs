//! Scoped key-value session storage
//!
//! The login and pin-changer screens share state through a keyed store
//! with two lifetimes: `Tab` for the authenticated credential pair and
//! `Window` for the manager id/level read across screens. Any backend with
//! equivalent lifetime semantics can stand in; [`FileStore`] persists each
//! scope as a JSON document so state survives a restart of the desk.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage scope, ordered from narrowest to widest lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Lives as long as the current tab; holds the raw credential pair
    Tab,
    /// Lives as long as the top-level window; shared across tabs
    Window,
}

impl Scope {
    fn file_name(self) -> &'static str {
        match self {
            Scope::Tab => "tab.json",
            Scope::Window => "window.json",
        }
    }
}

/// Keyed string store with per-scope lifetimes
pub trait KeyStore: Send + Sync {
    fn get(&self, scope: Scope, key: &str) -> Option<String>;
    fn set(&self, scope: Scope, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, scope: Scope, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, used by tests and embedded callers
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<(Scope, String), String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStore for MemoryStore {
    fn get(&self, scope: Scope, key: &str) -> Option<String> {
        self.data
            .lock()
            .unwrap()
            .get(&(scope, key.to_string()))
            .cloned()
    }

    fn set(&self, scope: Scope, key: &str, value: &str) -> Result<(), StoreError> {
        self.data
            .lock()
            .unwrap()
            .insert((scope, key.to_string()), value.to_string());
        Ok(())
    }

    fn remove(&self, scope: Scope, key: &str) -> Result<(), StoreError> {
        self.data.lock().unwrap().remove(&(scope, key.to_string()));
        Ok(())
    }
}

/// File-backed store persisting one JSON document per scope
///
/// A store reopened over the same directory observes previously written
/// keys, which is what lets a manager session survive a desk restart.
pub struct FileStore {
    dir: PathBuf,
    data: Mutex<HashMap<Scope, HashMap<String, String>>>,
}

impl FileStore {
    /// Open a store rooted at the given directory, loading any scope
    /// documents already present
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        let mut data = HashMap::new();

        for scope in [Scope::Tab, Scope::Window] {
            let path = dir.join(scope.file_name());
            let map = if path.exists() {
                let content = std::fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            } else {
                HashMap::new()
            };
            data.insert(scope, map);
        }

        Ok(Self {
            dir,
            data: Mutex::new(data),
        })
    }

    fn persist(&self, scope: Scope, map: &HashMap<String, String>) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(scope);
        let content = serde_json::to_string_pretty(map)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    fn path_for(&self, scope: Scope) -> PathBuf {
        self.dir.join(scope.file_name())
    }
}

impl KeyStore for FileStore {
    fn get(&self, scope: Scope, key: &str) -> Option<String> {
        self.data
            .lock()
            .unwrap()
            .get(&scope)
            .and_then(|map| map.get(key))
            .cloned()
    }

    fn set(&self, scope: Scope, key: &str, value: &str) -> Result<(), StoreError> {
        let mut data = self.data.lock().unwrap();
        let map = data.entry(scope).or_default();
        map.insert(key.to_string(), value.to_string());
        self.persist(scope, map)
    }

    fn remove(&self, scope: Scope, key: &str) -> Result<(), StoreError> {
        let mut data = self.data.lock().unwrap();
        let map = data.entry(scope).or_default();
        map.remove(key);
        self.persist(scope, map)
    }
}
