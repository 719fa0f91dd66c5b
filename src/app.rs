//! App core for termweb.
//!
//! Owns the bookmark store, the in-memory history, the HTTP fetcher, and the
//! link table of the currently displayed page, and runs the interactive
//! command loop over them.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use regex::Regex;

use crate::commands::{self, Command, SearchArgs};
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::pages::{BookmarksPage, HistoryPage, Page, PageView, WebPage};
use crate::services::fetcher::Fetcher;

const PROMPT_BLUE: Color = Color::Rgb { r: 0x51, g: 0x85, b: 0xec };
const PROMPT_RED: Color = Color::Rgb { r: 0xd8, g: 0x50, b: 0x40 };
const PROMPT_YELLOW: Color = Color::Rgb { r: 0xd8, g: 0xbe, b: 0x42 };
const PROMPT_GREEN: Color = Color::Rgb { r: 0x58, g: 0xa5, b: 0x5c };

/// What the loop should do after handling one line of input.
#[derive(Debug, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Quit,
}

/// Central application struct: stores, fetcher, and per-page link table.
pub struct App {
    bookmarks: BookmarkManager,
    history: HistoryManager,
    fetcher: Fetcher,
    link_table: Vec<String>,
    link_pattern: Regex,
}

impl App {
    /// Creates the app, loading (or creating) the bookmark store at
    /// `bookmark_path`.
    pub fn new(bookmark_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            bookmarks: BookmarkManager::load(bookmark_path)?,
            history: HistoryManager::new(),
            fetcher: Fetcher::new()?,
            link_table: Vec::new(),
            link_pattern: commands::link_reference_pattern()?,
        })
    }

    /// Runs the interactive command loop until quit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        clear_screen()?;
        let stdin = io::stdin();

        loop {
            print_prompt()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            if self.handle_input(&line)? == LoopAction::Quit {
                clear_screen()?;
                break;
            }
        }
        Ok(())
    }

    /// Handles one line of input: rewrite link references, parse, dispatch.
    ///
    /// Command errors are reported to the user and never end the loop.
    pub fn handle_input(&mut self, input: &str) -> io::Result<LoopAction> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(LoopAction::Continue);
        }

        let rewritten =
            match commands::rewrite_link_references(&self.link_pattern, trimmed, &self.link_table)
            {
                Ok(rewritten) => rewritten,
                Err(e) => {
                    print_error(&e.to_string())?;
                    return Ok(LoopAction::Continue);
                }
            };

        let command = match commands::parse(&rewritten) {
            Ok(command) => command,
            Err(e) => {
                print_error(&e.to_string())?;
                return Ok(LoopAction::Continue);
            }
        };

        match command {
            Command::Quit => return Ok(LoopAction::Quit),
            Command::Search(args) => self.search(&args)?,
            Command::AddBookmark(args) => {
                match self.bookmarks.add_bookmark(&args.url, &args.name) {
                    Ok(()) => print_success("Successfully added bookmark")?,
                    Err(e) => print_error(&e.to_string())?,
                }
            }
            Command::ShowBookmarks => {
                let view = BookmarksPage::new(self.bookmarks.bookmarks()).build();
                self.display(view)?;
            }
            Command::ShowHistory => {
                let view = HistoryPage::new(self.history.entries()).build();
                self.display(view)?;
            }
        }

        Ok(LoopAction::Continue)
    }

    /// Navigates to the resolved URL and records it in history when the
    /// page actually loaded.
    fn search(&mut self, args: &SearchArgs) -> io::Result<()> {
        let url = commands::resolve_query_url(&args.query);
        let view = WebPage::new(url.clone(), args.text_only, &self.fetcher).build();

        if view.loaded {
            self.history.record_visit(&url);
        }
        self.display(view)
    }

    /// Repaints the screen with a page view and replaces the link table.
    fn display(&mut self, view: PageView) -> io::Result<()> {
        clear_screen()?;
        let mut stdout = io::stdout();
        writeln!(stdout, "{}", view.content)?;
        self.link_table = view.links;
        Ok(())
    }
}

fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

/// Prints the Google-colored `Search: ` prompt and flushes.
fn print_prompt() -> io::Result<()> {
    let letters = [
        ('S', PROMPT_BLUE),
        ('e', PROMPT_RED),
        ('a', PROMPT_BLUE),
        ('r', PROMPT_YELLOW),
        ('c', PROMPT_GREEN),
        ('h', PROMPT_RED),
    ];

    let mut stdout = io::stdout();
    for (letter, color) in letters {
        write!(stdout, "{}", letter.with(color))?;
    }
    write!(stdout, ": ")?;
    stdout.flush()
}

fn print_error(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n", message.red())
}

fn print_success(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}\n", message.green())
}
