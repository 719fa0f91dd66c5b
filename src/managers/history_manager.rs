//! History Manager for termweb.
//!
//! Implements `HistoryManagerTrait` — an in-memory, append-only list of
//! visited URLs, lost on process exit.

/// Trait defining history management operations.
pub trait HistoryManagerTrait {
    fn record_visit(&mut self, url: &str);
    fn entries(&self) -> &[String];
}

/// In-memory browsing history.
#[derive(Debug, Default)]
pub struct HistoryManager {
    entries: Vec<String>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Appends a visited URL, skipping only an immediate duplicate of the
    /// previous entry. Earlier duplicates are kept.
    fn record_visit(&mut self, url: &str) {
        if self.entries.last().map(String::as_str) == Some(url) {
            return;
        }
        self.entries.push(url.to_string());
    }

    /// Returns the visit list, oldest first.
    fn entries(&self) -> &[String] {
        &self.entries
    }
}
