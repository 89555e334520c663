//! In-memory visit history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub title: String,
    pub visited_at: DateTime<Utc>,
    pub visit_count: u32,
}

/// Visit log for the running session. Nothing here is persisted.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a confirmed visit. Revisiting a known url bumps its count
    /// and freshens its title instead of growing the log.
    pub fn record_visit(&mut self, url: &str, title: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.url == url) {
            if !title.is_empty() {
                entry.title = title.to_string();
            }
            entry.visited_at = Utc::now();
            entry.visit_count += 1;
        } else {
            self.entries.push(HistoryEntry {
                url: url.to_string(),
                title: title.to_string(),
                visited_at: Utc::now(),
                visit_count: 1,
            });
        }
        tracing::debug!(url, "recorded visit");
    }

    /// Most recent first.
    pub fn recent(&self, limit: usize) -> Vec<&HistoryEntry> {
        // Reverse insertion order first so timestamp ties resolve to the
        // newest visit.
        let mut entries: Vec<&HistoryEntry> = self.entries.iter().rev().collect();
        entries.sort_by(|a, b| b.visited_at.cmp(&a.visited_at));
        entries.truncate(limit);
        entries
    }

    /// Case-insensitive substring match over url and title, most recent
    /// first.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&HistoryEntry> {
        let needle = query.to_lowercase();
        let mut hits: Vec<&HistoryEntry> = self
            .entries
            .iter()
            .rev()
            .filter(|entry| {
                entry.url.to_lowercase().contains(&needle)
                    || entry.title.to_lowercase().contains(&needle)
            })
            .collect();
        hits.sort_by(|a, b| {
            b.visited_at
                .cmp(&a.visited_at)
                .then(b.visit_count.cmp(&a.visit_count))
        });
        hits.truncate(limit);
        hits
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revisits_bump_the_count_instead_of_duplicating() {
        let mut log = HistoryLog::new();

        log.record_visit("https://example.com", "Example");
        log.record_visit("https://rust-lang.org", "Rust");
        log.record_visit("https://example.com", "Example");

        assert_eq!(log.len(), 2);
        let hits = log.search("example", 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].visit_count, 2);
    }

    #[test]
    fn empty_title_keeps_the_previous_one() {
        let mut log = HistoryLog::new();

        log.record_visit("https://example.com", "Example");
        log.record_visit("https://example.com", "");

        let hits = log.search("example.com", 10);
        assert_eq!(hits[0].title, "Example");
        assert_eq!(hits[0].visit_count, 2);
    }

    #[test]
    fn recent_returns_newest_first_and_respects_the_limit() {
        let mut log = HistoryLog::new();

        log.record_visit("https://one.example", "");
        log.record_visit("https://two.example", "");
        log.record_visit("https://three.example", "");

        let recent = log.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].url, "https://three.example");
        assert_eq!(recent[1].url, "https://two.example");
    }

    #[test]
    fn search_matches_titles_too() {
        let mut log = HistoryLog::new();

        log.record_visit("https://news.example", "Morning Paper");
        log.record_visit("https://blog.example", "Evening Notes");

        let hits = log.search("paper", 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "https://news.example");
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = HistoryLog::new();
        log.record_visit("https://example.com", "");

        log.clear();
        assert!(log.is_empty());
        assert!(log.recent(10).is_empty());
    }
}
