//! The browsing history page.

use crossterm::style::Stylize;

use crate::render::styles::{self, StyleMode, LINK_COLOR};

use super::{Page, PageView};

/// Lists every visited URL with an ordinal; the link table is the history
/// itself, oldest first.
pub struct HistoryPage<'a> {
    entries: &'a [String],
}

impl<'a> HistoryPage<'a> {
    pub fn new(entries: &'a [String]) -> Self {
        Self { entries }
    }
}

impl Page for HistoryPage<'_> {
    fn build(&self) -> PageView {
        let mut content = styles::heading(StyleMode::Styled, "History");
        for (index, url) in self.entries.iter().enumerate() {
            let line = format!("({}) {}", index + 1, url);
            content.push_str(&format!("{}", line.as_str().with(LINK_COLOR)));
            if index < self.entries.len() - 1 {
                content.push_str("\n\n");
            }
        }

        PageView::new(content, self.entries.to_vec())
    }
}
