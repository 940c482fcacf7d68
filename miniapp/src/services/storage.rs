//! # Device Key-Value Storage
//!
//! Persistent string storage standing in for the WebView's local storage.
//! The client keeps exactly four keys here: the session token, its expiry,
//! the selected language and the selected theme.
//!
//! [`FileStorage`] persists to a single JSON object on disk and writes
//! through on every mutation. [`MemoryStorage`] backs tests and throwaway
//! sessions.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::error::{AppError, Result};

/// Storage key for the session bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key for the session token expiry (RFC 3339).
pub const AUTH_TOKEN_EXPIRY_KEY: &str = "auth_token_expiry";
/// Storage key for the selected interface language (`en`/`ru`/`uz`).
pub const LANGUAGE_KEY: &str = "language";
/// Storage key for the selected theme (`light`/`dark`).
pub const THEME_KEY: &str = "theme";

/// String key-value storage with atomic single-key operations.
pub trait KeyValueStorage: Send + Sync {
    /// Read a value. Missing keys are `None`, never an error.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Deleting a missing key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// JSON-file-backed storage.
///
/// The whole map is rewritten on every mutation; the four keys the client
/// uses make that cheap. A missing file reads as empty, a corrupt file is an
/// error so a broken session is noticed instead of silently dropped.
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    /// Open storage at `path`, loading existing entries if the file exists.
    pub fn open(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| AppError::Storage(format!("read {}: {}", path.display(), e)))?;
            serde_json::from_str(&content)
                .map_err(|e| AppError::Storage(format!("parse {}: {}", path.display(), e)))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries: RwLock::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::Storage(format!("create {}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::Storage(format!("serialize storage: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| AppError::Storage(format!("write {}: {}", self.path.display(), e)))?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write();
        entries.remove(key);
        self.flush(&entries)
    }
}
