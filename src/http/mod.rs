//! HTTP client module
//!
//! A thin wrapper over reqwest that issues a single GET and turns the
//! response into a typed body.
//!
//! # Failure classification
//!
//! - **Bad status**: any non-2xx response becomes [`Error::HttpStatus`](crate::Error::HttpStatus)
//! - **Transport**: connection, TLS or body read failures become [`Error::Http`](crate::Error::Http)
//! - **Schema**: a body that does not deserialize becomes [`Error::MalformedResponse`](crate::Error::MalformedResponse)
//!
//! There is no retry and no backoff.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
