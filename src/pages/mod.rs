//! Page abstraction for termweb.
//!
//! Every screen the browser can show — a fetched web page, the bookmark
//! listing, the history listing — builds a [`PageView`]: the styled display
//! text plus the ordered link table that `*N` references resolve against.

pub mod bookmarks_page;
pub mod history_page;
pub mod web_page;

pub use bookmarks_page::BookmarksPage;
pub use history_page::HistoryPage;
pub use web_page::WebPage;

use crate::render::styles::{self, StyleMode};

/// A built page: display text, link table, and whether the page loaded.
#[derive(Debug, Clone)]
pub struct PageView {
    pub content: String,
    pub links: Vec<String>,
    pub loaded: bool,
}

impl PageView {
    pub fn new(content: String, links: Vec<String>) -> Self {
        Self {
            content,
            links,
            loaded: true,
        }
    }

    /// The single failure view for an unreachable or unparseable page:
    /// one message, no links.
    pub fn failure(mode: StyleMode) -> Self {
        Self {
            content: styles::failure(mode, "This page cannot be displayed."),
            links: Vec::new(),
            loaded: false,
        }
    }
}

/// A screen the browser can display.
pub trait Page {
    fn build(&self) -> PageView;
}
