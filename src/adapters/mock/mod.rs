//! Mock adapter implementations for testing.

pub mod http;
pub mod random;

pub use http::{MockHttpClient, MockResponse};
pub use random::SeqRandom;
