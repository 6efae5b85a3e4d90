//! HTTP Module
//!
//! reqwest implementation of the core `VerificationTransport` trait.
//!
//! ## Features
//!
//! - JSON requests with `Authorization: Bearer` and `X-API-KEY` headers
//! - Explicit request and connect timeouts
//! - Every HTTP status is handed back to the session; only failures without
//!   a response become transport errors

pub mod reqwest_transport;

pub use reqwest_transport::{ReqwestTransport, API_KEY_HEADER};

#[cfg(test)]
mod tests;
