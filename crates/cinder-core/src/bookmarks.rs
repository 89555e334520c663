//! Bookmark records and list operations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

/// Ordered bookmark list, display order = insertion order.
///
/// Serializes as a bare JSON array, which is the on-disk format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bookmarks(Vec<Bookmark>);

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bookmark. Bookmarking an already-saved url refreshes its
    /// title instead of duplicating the entry.
    pub fn add(&mut self, title: String, url: String) {
        if let Some(existing) = self.0.iter_mut().find(|b| b.url == url) {
            existing.title = title;
        } else {
            self.0.push(Bookmark { title, url });
        }
    }

    /// Remove every entry for `url`. Returns whether anything was removed.
    pub fn remove(&mut self, url: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|b| b.url != url);
        self.0.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
