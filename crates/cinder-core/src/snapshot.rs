//! Saved-session document.

use serde::{Deserialize, Serialize};

/// What survives a shutdown: the tab urls in display order and which one
/// had focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSession {
    pub tabs: Vec<String>,
    #[serde(default)]
    pub active: usize,
}
