//! Unit tests for the error types' user-facing messages.
//!
//! The command loop prints these `Display` impls verbatim, so their wording
//! is part of the CLI surface.

use termweb::types::errors::{CommandError, FetchError, RenderError, StoreError};

#[test]
fn test_store_error_messages() {
    let io = StoreError::IoError("denied".to_string());
    assert_eq!(io.to_string(), "Bookmark store I/O error: denied");

    let ser = StoreError::SerializationError("bad json".to_string());
    assert_eq!(
        ser.to_string(),
        "Bookmark store serialization error: bad json"
    );
}

#[test]
fn test_fetch_error_messages() {
    let client = FetchError::ClientError("tls".to_string());
    assert_eq!(client.to_string(), "HTTP client error: tls");

    let network = FetchError::NetworkError("timed out".to_string());
    assert_eq!(network.to_string(), "Network error: timed out");
}

/// Unknown-flag and missing-flag messages mirror the prompt's wording so
/// the user sees exactly which flag was wrong.
#[test]
fn test_command_error_messages() {
    let unknown = CommandError::UnknownFlag("-x".to_string());
    assert_eq!(unknown.to_string(), "-x is not a valid argument");

    let missing = CommandError::MissingFlag("-q".to_string());
    assert_eq!(missing.to_string(), "-q is a required argument");

    let reference = CommandError::LinkReference("*7".to_string());
    assert_eq!(
        reference.to_string(),
        "*7 does not match a link on this page"
    );

    assert_eq!(
        CommandError::UnterminatedQuote.to_string(),
        "Unterminated quote in arguments"
    );
}

#[test]
fn test_render_error_messages() {
    assert_eq!(
        RenderError::TooDeep.to_string(),
        "Tag tree nested too deeply to render"
    );
}

/// All error types implement `std::error::Error` so they can be boxed at
/// the app boundary.
#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error>(_e: &E) {}

    assert_error(&StoreError::IoError(String::new()));
    assert_error(&FetchError::NetworkError(String::new()));
    assert_error(&CommandError::UnterminatedQuote);
    assert_error(&RenderError::TooDeep);
}
