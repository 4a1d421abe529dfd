//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the COP
//! server: the capability registry, the dispatcher, error handling,
//! configuration, metrics, and the transport layer.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod metrics;
pub mod registry;
pub mod transport;

pub use config::Config;
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
pub use metrics::HandshakeMetrics;
pub use registry::{Capability, CapabilityKind, CapabilityRegistry, HandshakeAck};
pub use transport::{HttpConfig, HttpTransport};
