//! Command parsing for the interactive prompt.
//!
//! A line of input becomes a [`Command`]: a leading recognized command token
//! selects the command and the rest of the line is tokenized shell-style
//! into flag/value pairs, validated against the command's accepted and
//! required flag sets. Anything else is a search query for the whole line.

use regex::Regex;
use url::Url;

use crate::types::errors::CommandError;

/// Search engine prefix used when the query is not already a URL.
const SEARCH_URL: &str = "http://www.google.com/search?q=";

/// A parsed, validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(SearchArgs),
    AddBookmark(AddBookmarkArgs),
    ShowBookmarks,
    ShowHistory,
    Quit,
}

/// Arguments to `--search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    pub query: String,
    /// Render without inline styling (`-to`).
    pub text_only: bool,
}

/// Arguments to `--add-bookmark`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBookmarkArgs {
    pub url: String,
    pub name: String,
}

/// Parses one line of input into a command.
///
/// An unknown or missing flag aborts the command with an error; the caller
/// reports it and keeps the loop running.
pub fn parse(input: &str) -> Result<Command, CommandError> {
    let trimmed = input.trim();

    if trimmed == "-q" || trimmed == "--quit" {
        return Ok(Command::Quit);
    }

    let (command, rest) = match trimmed.split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (trimmed, ""),
    };

    match command {
        "--search" => {
            let flags = parse_flags(rest, &["-q", "-to"], &["-q"])?;
            let query = flag_value(&flags, "-q")
                .ok_or_else(|| CommandError::MissingFlag("-q".to_string()))?;
            let text_only = has_flag(&flags, "-to");
            Ok(Command::Search(SearchArgs { query, text_only }))
        }
        "--add-bookmark" => {
            let flags = parse_flags(rest, &["-l", "-n"], &["-l", "-n"])?;
            let url = flag_value(&flags, "-l")
                .ok_or_else(|| CommandError::MissingFlag("-l".to_string()))?;
            let name = flag_value(&flags, "-n")
                .ok_or_else(|| CommandError::MissingFlag("-n".to_string()))?;
            Ok(Command::AddBookmark(AddBookmarkArgs { url, name }))
        }
        "--show-bookmarks" => {
            parse_flags(rest, &[], &[])?;
            Ok(Command::ShowBookmarks)
        }
        "--show-history" => {
            parse_flags(rest, &[], &[])?;
            Ok(Command::ShowHistory)
        }
        // No recognized command token: the whole line is a search query.
        _ => Ok(Command::Search(SearchArgs {
            query: trimmed.to_string(),
            text_only: false,
        })),
    }
}

/// The pattern for `*N` link-reference tokens.
pub fn link_reference_pattern() -> Result<Regex, regex::Error> {
    Regex::new(r"\*(\d+)")
}

/// Replaces each `*N` token in `input` with the Nth stored URL.
///
/// A token whose ordinal does not map into `links` aborts the command.
pub fn rewrite_link_references(
    pattern: &Regex,
    input: &str,
    links: &[String],
) -> Result<String, CommandError> {
    let mut output = String::new();
    let mut cursor = 0;

    for caps in pattern.captures_iter(input) {
        let token = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        let url = caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| links.get(i))
            .ok_or_else(|| CommandError::LinkReference(token.as_str().to_string()))?;

        output.push_str(&input[cursor..token.start()]);
        output.push_str(url);
        cursor = token.end();
    }

    output.push_str(&input[cursor..]);
    Ok(output)
}

/// Turns a query into a navigable URL.
///
/// Input that already parses as an http(s) URL is used literally (with
/// internal whitespace removed); anything else becomes a search-engine
/// query URL with words joined by `+`.
pub fn resolve_query_url(query: &str) -> String {
    let trimmed = query.trim();

    if let Ok(parsed) = Url::parse(trimmed) {
        if matches!(parsed.scheme(), "http" | "https") {
            return trimmed.split_whitespace().collect();
        }
    }

    let mut url = String::from(SEARCH_URL);
    for word in trimmed.split_whitespace() {
        url.push_str(word);
        url.push('+');
    }
    url
}

/// Splits an argument string into tokens, grouping double- or single-quoted
/// words.
fn tokenize(input: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut started = false;
    let mut quote: Option<char> = None;

    for ch in input.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None => match ch {
                '"' | '\'' => {
                    quote = Some(ch);
                    started = true;
                }
                c if c.is_whitespace() => {
                    if started {
                        tokens.push(std::mem::take(&mut current));
                        started = false;
                    }
                }
                c => {
                    current.push(c);
                    started = true;
                }
            },
        }
    }

    if quote.is_some() {
        return Err(CommandError::UnterminatedQuote);
    }
    if started {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Scans tokens into flag/value pairs and validates them.
///
/// A flag's value is the following token unless that token is itself a
/// flag, in which case the flag is boolean. Bare words between flags are
/// ignored.
fn parse_flags(
    rest: &str,
    accepted: &[&str],
    required: &[&str],
) -> Result<Vec<(String, Option<String>)>, CommandError> {
    let tokens = tokenize(rest)?;
    let mut flags: Vec<(String, Option<String>)> = Vec::new();

    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        if token.starts_with('-') {
            let value = match tokens.get(index + 1) {
                Some(next) if !next.starts_with('-') => {
                    index += 1;
                    Some(next.clone())
                }
                _ => None,
            };
            flags.push((token.clone(), value));
        }
        index += 1;
    }

    for (flag, _) in &flags {
        if !accepted.contains(&flag.as_str()) {
            return Err(CommandError::UnknownFlag(flag.clone()));
        }
    }
    for required_flag in required {
        if !flags.iter().any(|(flag, _)| flag == required_flag) {
            return Err(CommandError::MissingFlag(required_flag.to_string()));
        }
    }

    Ok(flags)
}

fn flag_value(flags: &[(String, Option<String>)], name: &str) -> Option<String> {
    flags
        .iter()
        .find(|(flag, _)| flag == name)
        .and_then(|(_, value)| value.clone())
}

fn has_flag(flags: &[(String, Option<String>)], name: &str) -> bool {
    flags.iter().any(|(flag, _)| flag == name)
}
