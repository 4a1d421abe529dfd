//! Transport layer for the COP server.
//!
//! The dispatcher core is transport-agnostic; this module provides the HTTP
//! routing layer that exposes it, handling the connection lifecycle and
//! translating dispatch errors into status codes and `detail` bodies.

mod config;
mod error;

pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
