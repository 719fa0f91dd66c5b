use std::fmt;

// === StoreError ===

/// Errors related to the bookmark store.
#[derive(Debug)]
pub enum StoreError {
    /// An I/O error occurred while reading or writing the store file.
    IoError(String),
    /// Failed to serialize or deserialize the bookmark list.
    SerializationError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(msg) => write!(f, "Bookmark store I/O error: {}", msg),
            StoreError::SerializationError(msg) => {
                write!(f, "Bookmark store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === FetchError ===

/// Errors related to fetching a page over HTTP.
#[derive(Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    ClientError(String),
    /// The request failed (DNS, connect, timeout, malformed URL, body read).
    NetworkError(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::ClientError(msg) => write!(f, "HTTP client error: {}", msg),
            FetchError::NetworkError(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

// === CommandError ===

/// Errors related to parsing a line of user input into a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A flag was passed that the command does not accept.
    UnknownFlag(String),
    /// A flag the command requires was not passed.
    MissingFlag(String),
    /// A `*N` link reference pointed outside the current link table.
    LinkReference(String),
    /// A quoted argument was never closed.
    UnterminatedQuote,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownFlag(flag) => {
                write!(f, "{} is not a valid argument", flag)
            }
            CommandError::MissingFlag(flag) => {
                write!(f, "{} is a required argument", flag)
            }
            CommandError::LinkReference(token) => {
                write!(f, "{} does not match a link on this page", token)
            }
            CommandError::UnterminatedQuote => write!(f, "Unterminated quote in arguments"),
        }
    }
}

impl std::error::Error for CommandError {}

// === RenderError ===

/// Errors related to rendering a single tag subtree.
///
/// A failed tag contributes an empty string to the page; rendering of the
/// remaining tags continues.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderError {
    /// Element nesting exceeded the traversal depth bound.
    TooDeep,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TooDeep => write!(f, "Tag tree nested too deeply to render"),
        }
    }
}

impl std::error::Error for RenderError {}
