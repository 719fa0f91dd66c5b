//! Bookmark Manager for termweb.
//!
//! Implements `BookmarkManagerTrait` — loading and appending bookmarks,
//! persisted as a JSON array on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::bookmark::Bookmark;
use crate::types::errors::StoreError;

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(&mut self, url: &str, name: &str) -> Result<(), StoreError>;
    fn bookmarks(&self) -> &[Bookmark];
}

/// Bookmark manager backed by a JSON file.
///
/// The entire list is rewritten on every addition; a crash mid-write can
/// leave a truncated file.
pub struct BookmarkManager {
    path: PathBuf,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkManager {
    /// Loads the bookmark list from the JSON file at `path`.
    ///
    /// If the file does not exist, it is created containing an empty array.
    /// If the file exists but is malformed, returns a serialization error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            log::debug!("no bookmark file at {}, creating one", path.display());
            let manager = Self {
                path,
                bookmarks: Vec::new(),
            };
            manager.save()?;
            return Ok(manager);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StoreError::IoError(format!("Failed to read bookmark file: {}", e)))?;

        let bookmarks: Vec<Bookmark> = serde_json::from_str(&content).map_err(|e| {
            StoreError::SerializationError(format!("Failed to parse bookmark file: {}", e))
        })?;

        Ok(Self { path, bookmarks })
    }

    /// Writes the full bookmark list back to disk.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::IoError(format!("Failed to create bookmark directory: {}", e))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&self.bookmarks).map_err(|e| {
            StoreError::SerializationError(format!("Failed to serialize bookmarks: {}", e))
        })?;

        fs::write(&self.path, json)
            .map_err(|e| StoreError::IoError(format!("Failed to write bookmark file: {}", e)))
    }

    /// Returns the path of the backing JSON file.
    pub fn store_path(&self) -> &Path {
        &self.path
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    /// Appends a bookmark and rewrites the whole persisted list.
    fn add_bookmark(&mut self, url: &str, name: &str) -> Result<(), StoreError> {
        self.bookmarks.push(Bookmark::new(url, name));
        self.save()?;
        log::debug!("added bookmark {:?} -> {}", name, url);
        Ok(())
    }

    /// Returns the in-memory bookmark list, in insertion order.
    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }
}
