//! The bookmark listing page.

use crossterm::style::Stylize;

use crate::render::styles::{self, StyleMode, LINK_COLOR};
use crate::types::bookmark::Bookmark;

use super::{Page, PageView};

/// Lists every saved bookmark with an ordinal; the link table maps ordinal
/// N to the Nth bookmark's URL.
pub struct BookmarksPage<'a> {
    bookmarks: &'a [Bookmark],
}

impl<'a> BookmarksPage<'a> {
    pub fn new(bookmarks: &'a [Bookmark]) -> Self {
        Self { bookmarks }
    }

    fn format_bookmark(bookmark: &Bookmark, ordinal: usize) -> String {
        let name_line = format!("({}) {}", ordinal, bookmark.name);
        format!(
            "{}\n{}",
            name_line.as_str().green(),
            bookmark.url.as_str().with(LINK_COLOR)
        )
    }
}

impl Page for BookmarksPage<'_> {
    fn build(&self) -> PageView {
        if self.bookmarks.is_empty() {
            let hint = "You don't have any bookmarks yet! \
                        Try adding one with the --add-bookmark command";
            return PageView::new(format!("{}", hint.green()), Vec::new());
        }

        let mut content = styles::heading(StyleMode::Styled, "Bookmarks");
        for (index, bookmark) in self.bookmarks.iter().enumerate() {
            content.push_str(&Self::format_bookmark(bookmark, index + 1));
            if index < self.bookmarks.len() - 1 {
                content.push_str("\n\n");
            }
        }

        let links = self.bookmarks.iter().map(|b| b.url.clone()).collect();
        PageView::new(content, links)
    }
}
