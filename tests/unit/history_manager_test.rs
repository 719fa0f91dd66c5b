//! Unit tests for the HistoryManager public API.
//!
//! History is in-memory and append-only, de-duplicated only against the
//! immediate predecessor.

use termweb::managers::history_manager::{HistoryManager, HistoryManagerTrait};

#[test]
fn test_visits_append_in_order() {
    let mut history = HistoryManager::new();
    history.record_visit("http://a.example");
    history.record_visit("http://b.example");
    history.record_visit("http://c.example");

    assert_eq!(
        history.entries(),
        ["http://a.example", "http://b.example", "http://c.example"]
    );
}

/// Revisiting the current page does not grow the history.
#[test]
fn test_immediate_duplicate_skipped() {
    let mut history = HistoryManager::new();
    history.record_visit("http://a.example");
    history.record_visit("http://a.example");
    history.record_visit("http://a.example");

    assert_eq!(history.entries(), ["http://a.example"]);
}

/// Only *consecutive* duplicates are suppressed; going back to an earlier
/// page records a new entry.
#[test]
fn test_nonconsecutive_duplicate_kept() {
    let mut history = HistoryManager::new();
    history.record_visit("http://a.example");
    history.record_visit("http://b.example");
    history.record_visit("http://a.example");

    assert_eq!(
        history.entries(),
        ["http://a.example", "http://b.example", "http://a.example"]
    );
}

#[test]
fn test_starts_empty() {
    let history = HistoryManager::new();
    assert!(history.entries().is_empty());
}
