//! COP Server Library
//!
//! Central Orchestration Platform (COP): a single HTTP-facing endpoint
//! exposing a fixed set of named resources, tools, and prompts through a
//! model-context-style handshake/dispatch contract.
//!
//! # Architecture
//!
//! - **core**: the capability registry, the dispatcher, configuration,
//!   error handling, metrics, and the HTTP transport
//! - **domains**: capability kinds organized by bounded contexts
//!   - **resources**: static data records looked up by identifier
//!   - **tools**: invocable handlers that execute commands
//!   - **prompts**: static descriptions of ordered external workflows
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cop_server::core::{CapabilityRegistry, Dispatcher};
//!
//! let registry = Arc::new(CapabilityRegistry::with_defaults());
//! let dispatcher = Dispatcher::new(registry);
//! let resource = dispatcher.get_resource("minikube_status").unwrap();
//! assert_eq!(resource.status, "success");
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{CapabilityRegistry, Config, Dispatcher, Error, Result};
