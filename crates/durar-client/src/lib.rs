//! HTTP gateway client for the Dorar hadith API.
//!
//! A thin typed wrapper over the upstream's JSON-over-HTTPS GET endpoints,
//! implementing [`durar_core::source::HadithSource`]. Transport and decoding
//! failures are normalised into [`ApiError`]; no retries are performed at
//! this layer — retry policy, if any, belongs to the caller.

pub mod client;
pub mod error;

pub use client::{ApiConfig, DorarClient, DEFAULT_BASE_URL};
pub use error::ApiError;

#[cfg(test)]
mod tests;
