//! Error types for page fetching.
//!
//! Everything that can go wrong while loading a page collapses into
//! [`DataError`]. The variants keep transport, HTTP-level, application-level
//! and decode failures apart for diagnostics, but the UI only ever shows the
//! single message produced by [`DataError::user_message`].

use thiserror::Error;

/// Generic localized fallback shown when the API gives us no usable
/// `status` text.
pub const FALLBACK_ERROR_MESSAGE: &str = "حدث خطأ في جلب البيانات";

/// Errors raised by the page fetcher.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The server answered with a non-2xx HTTP status.
    #[error("HTTP {status} error")]
    Http {
        status: u16,
        /// `status` field from the response body, when it could be parsed.
        status_text: Option<String>,
    },

    /// The response was well-formed but its embedded `code` was not 200.
    #[error("API returned code {code}")]
    Api {
        code: i64,
        status_text: Option<String>,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("malformed response: {message}")]
    Decode { message: String },
}

impl DataError {
    /// The message surfaced in the error banner.
    ///
    /// Prefers the `status` text the API sent back; every other failure gets
    /// the generic localized fallback.
    pub fn user_message(&self) -> String {
        match self {
            DataError::Http {
                status_text: Some(text),
                ..
            }
            | DataError::Api {
                status_text: Some(text),
                ..
            } => text.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}
