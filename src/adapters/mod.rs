//! Adapter implementations of the capability traits.
//!
//! Production adapters wrap reqwest and the process RNG; the `mock` module
//! holds in-memory implementations for tests.

pub mod mock;
pub mod rand_source;
pub mod reqwest_http;

pub use rand_source::ThreadRngSource;
pub use reqwest_http::ReqwestHttpClient;
