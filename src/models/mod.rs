//! Wire models for the alquran.cloud text API.
//!
//! The API wraps every payload in an envelope:
//! `{ "code": 200, "status": "OK", "data": { "ayahs": [...] } }`.
//! `code` is the application-level status; the `status` string doubles as
//! the error message on failures.

use serde::Deserialize;

/// Total number of pages in the standard pagination scheme.
pub const TOTAL_PAGES: u16 = 604;

/// Top-level response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope {
    pub code: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<PageData>,
}

/// Payload of a successful page request.
#[derive(Debug, Clone, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub ayahs: Vec<Ayah>,
}

/// A single verse as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Ayah {
    pub text: String,
    #[serde(rename = "numberInSurah")]
    pub number_in_surah: u32,
    #[serde(default)]
    pub surah: Option<SurahRef>,
}

/// Reference to the chapter containing a verse.
#[derive(Debug, Clone, Deserialize)]
pub struct SurahRef {
    pub number: u32,
    pub name: String,
}
