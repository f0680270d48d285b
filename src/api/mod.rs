//! Client for the alquran.cloud text API.
//!
//! One operation: fetch the verses of a single page in the Uthmani
//! rendering. Each call is one GET with no retry and no caching; repeated
//! calls for the same page are independent.

use std::sync::Arc;

use crate::error::DataError;
use crate::models::{PageData, PageEnvelope, TOTAL_PAGES};
use crate::traits::HttpClient;

/// Default base URL for the Quran text API.
pub const QURAN_API_URL: &str = "https://api.alquran.cloud/v1";

/// Fixed textual rendering style requested for every page.
const EDITION: &str = "quran-uthmani";

/// Embedded status code the API uses for success.
const API_SUCCESS_CODE: i64 = 200;

/// Page fetcher over an injected [`HttpClient`].
#[derive(Clone)]
pub struct QuranClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl QuranClient {
    /// Create a client against the default API base URL.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_url(http, QURAN_API_URL)
    }

    /// Create a client against a custom base URL (used by tests).
    pub fn with_url(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// URL of the page endpoint for a given page number.
    fn page_url(&self, page: u16) -> String {
        format!("{}/page/{}/{}", self.base_url, page, EDITION)
    }

    /// Fetch the verses of one page.
    ///
    /// Fails with [`DataError`] when the transport fails, the HTTP status is
    /// non-2xx, the embedded `code` is not 200, or the body cannot be
    /// decoded. The error message prefers the response's `status` field.
    pub async fn get_page(&self, page: u16) -> Result<PageData, DataError> {
        debug_assert!((1..=TOTAL_PAGES).contains(&page));

        let url = self.page_url(page);
        tracing::debug!(page, %url, "fetching page");

        let response = self.http.get(&url).await.map_err(|e| {
            tracing::warn!(page, error = %e, "page request failed");
            DataError::Transport {
                message: e.to_string(),
            }
        })?;

        // The error envelope still carries the user-facing `status` text, so
        // try to decode the body even on a failed HTTP status.
        let envelope: Option<PageEnvelope> = response.json().ok();

        if !response.is_success() {
            let status_text = envelope.and_then(|e| e.status);
            tracing::warn!(page, status = response.status, "non-success HTTP status");
            return Err(DataError::Http {
                status: response.status,
                status_text,
            });
        }

        let envelope = envelope.ok_or_else(|| DataError::Decode {
            message: "response body is not a valid page envelope".to_string(),
        })?;

        if envelope.code != API_SUCCESS_CODE {
            tracing::warn!(page, code = envelope.code, "non-success API code");
            return Err(DataError::Api {
                code: envelope.code,
                status_text: envelope.status,
            });
        }

        envelope.data.ok_or_else(|| DataError::Decode {
            message: "success envelope is missing the data field".to_string(),
        })
    }
}
