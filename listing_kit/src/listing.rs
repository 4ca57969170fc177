//! Directory listing
//!
//! Enumerates the direct children of a directory by name. Files and
//! subdirectories are listed alike; nothing is filtered and nothing is
//! traversed recursively.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::ListingError;

/// Names of the direct children of a directory
///
/// Serializes as a plain JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntryList(Vec<String>);

impl EntryList {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Sort names byte-wise
    pub fn sorted(mut self) -> Self {
        self.0.sort();
        self
    }
}

impl FromIterator<String> for EntryList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for EntryList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Order in which entries are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrder {
    /// Whatever order the filesystem returns
    #[default]
    AsListed,
    /// Byte-wise lexicographic order
    Sorted,
}

impl EntryOrder {
    pub fn apply(self, entries: EntryList) -> EntryList {
        match self {
            EntryOrder::AsListed => entries,
            EntryOrder::Sorted => entries.sorted(),
        }
    }
}

impl std::fmt::Display for EntryOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryOrder::AsListed => write!(f, "as-listed"),
            EntryOrder::Sorted => write!(f, "sorted"),
        }
    }
}

/// List the names of all direct children of `dir_path`
///
/// The path must exist and resolve (through symlinks) to a directory.
/// Entries come back in enumeration order. Any unreadable entry or name that
/// is not valid UTF-8 fails the whole listing.
pub fn list_entries(dir_path: &Path) -> Result<EntryList, ListingError> {
    let metadata =
        fs::metadata(dir_path).map_err(|e| ListingError::from_open(dir_path.to_path_buf(), e))?;

    if !metadata.is_dir() {
        return Err(ListingError::NotADirectory {
            path: dir_path.to_path_buf(),
        });
    }

    let entries =
        fs::read_dir(dir_path).map_err(|e| ListingError::from_open(dir_path.to_path_buf(), e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ListingError::ReadEntry {
            path: dir_path.to_path_buf(),
            source: e,
        })?;

        let name = entry
            .file_name()
            .into_string()
            .map_err(|name| ListingError::InvalidName {
                dir: dir_path.to_path_buf(),
                name,
            })?;

        log::trace!("Found entry: {}", name);
        names.push(name);
    }

    log::debug!("Listed {} entries in {}", names.len(), dir_path.display());
    Ok(EntryList(names))
}

// ============================================================================
// Tests
// ============================================================================
