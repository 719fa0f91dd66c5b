//! Property-based tests for bookmark persistence.
//!
//! Adding a bookmark and reloading the store from disk always yields a list
//! one longer whose last element is the added record, for arbitrary valid
//! URLs and names.

use proptest::prelude::*;
use tempfile::TempDir;
use termweb::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use termweb::types::bookmark::Bookmark;

/// Strategy for generating valid URL strings.
/// Produces URLs with http/https scheme, alphanumeric host, and optional path.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

/// Strategy for generating non-empty bookmark names.
fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{1,30}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Add-then-reload grows the persisted list by exactly one, with the
    /// new record last.
    #[test]
    fn add_then_reload_appends_record(url in arb_url(), name in arb_name()) {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("bookmarks.json");

        // Seed the store so growth is measured against a non-trivial base.
        {
            let mut manager = BookmarkManager::load(&path)
                .expect("store should load in a fresh directory");
            manager.add_bookmark("https://seed.example", "Seed")
                .expect("seeding should succeed");
        }

        let before = BookmarkManager::load(&path)
            .expect("reload should succeed")
            .bookmarks()
            .len();

        {
            let mut manager = BookmarkManager::load(&path).expect("reload should succeed");
            manager.add_bookmark(&url, &name).expect("add should succeed");
        }

        let reloaded = BookmarkManager::load(&path).expect("reload should succeed");
        prop_assert_eq!(reloaded.bookmarks().len(), before + 1);
        prop_assert_eq!(
            reloaded.bookmarks().last(),
            Some(&Bookmark::new(url, name))
        );
    }

    /// The full sequence of additions survives a reload in order.
    #[test]
    fn additions_preserve_order(
        records in prop::collection::vec((arb_url(), arb_name()), 1..8),
    ) {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("bookmarks.json");

        {
            let mut manager = BookmarkManager::load(&path)
                .expect("store should load in a fresh directory");
            for (url, name) in &records {
                manager.add_bookmark(url, name).expect("add should succeed");
            }
        }

        let reloaded = BookmarkManager::load(&path).expect("reload should succeed");
        let expected: Vec<Bookmark> = records
            .iter()
            .map(|(url, name)| Bookmark::new(url.clone(), name.clone()))
            .collect();
        prop_assert_eq!(reloaded.bookmarks(), expected.as_slice());
    }
}
