//! Trait abstractions for external capabilities.
//!
//! These traits decouple the load workflow from the network and from the
//! process RNG so both can be swapped out in tests.

pub mod http;
pub mod random;

pub use http::{HttpClient, HttpError, Response};
pub use random::RandomSource;
