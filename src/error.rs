//! Error handling for the search core.
//!
//! Only input-validation problems cross the dispatcher boundary as errors.
//! Provider-level failures (timeouts, upstream errors, malformed payloads)
//! are captured by the adapters and reported as structured data inside the
//! per-category results instead.

use thiserror::Error;

/// Errors surfaced to callers of the dispatcher or unified client.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request failed validation before any provider was invoked.
    #[error("{0}")]
    InvalidInput(String),

    /// A record-type token that does not name any supported category.
    #[error("invalid record type: {token}. Valid types: court, property, business, government, background, vehicle")]
    UnknownCategory { token: String },

    /// Startup-time configuration problem (e.g. the shared HTTP client
    /// could not be constructed).
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for convenience
pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_displays_bare_message() {
        let err = SearchError::InvalidInput("Please enter a search term".to_string());
        assert_eq!(err.to_string(), "Please enter a search term");
    }

    #[test]
    fn unknown_category_names_the_token() {
        let err = SearchError::UnknownCategory {
            token: "astral_records".to_string(),
        };
        assert!(err.to_string().contains("astral_records"));
    }
}
