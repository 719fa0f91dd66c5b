use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// Bookmarks are an append-only ordered sequence; uniqueness of URLs is
/// deliberately not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub url: String,
    pub name: String,
}

impl Bookmark {
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }
}
