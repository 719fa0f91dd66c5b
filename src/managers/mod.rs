//! Managers for termweb's user data: bookmarks and browsing history.

pub mod bookmark_manager;
pub mod history_manager;
