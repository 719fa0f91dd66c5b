//! termweb — a minimal text-mode web browser with numbered link navigation.
//!
//! Entry point: initializes logging, loads the bookmark store from the
//! working directory, and runs the interactive command loop.

use termweb::app::App;

/// Bookmark store file, created on first run if missing.
const BOOKMARK_FILE: &str = "bookmarks.json";

fn main() {
    env_logger::init();

    let mut app = match App::new(BOOKMARK_FILE) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("termweb: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run() {
        eprintln!("termweb: {}", e);
        std::process::exit(1);
    }
}
