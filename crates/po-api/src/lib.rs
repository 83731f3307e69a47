//! # PO API
//!
//! HTTP client for the PO Manager REST API.
//! `PoApiClient` is the thin facade: one method per server operation, each
//! returning the raw response. `PoManager` layers typed decoding and status
//! checks on top of it.

pub mod client;
pub mod config;
pub mod errors;
pub mod sdk;
pub mod transport;

// Re-export common types for convenience
pub use client::*;
pub use config::*;
pub use errors::*;
pub use sdk::*;
pub use transport::*;

// Re-export core types that API consumers will need
pub use po_core::{ApiPath, Endpoint, HttpMethod, Resource};
