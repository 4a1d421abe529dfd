//! Error types and handling for the COP server.
//!
//! This module defines a unified error type aggregating the per-domain
//! errors, plus the handshake failure that belongs to no capability kind.
//! The HTTP layer maps these onto status codes and `detail` bodies.

use thiserror::Error;

/// A specialized Result type for dispatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the COP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Handshake payload absent or structurally invalid. A client error;
    /// never retried.
    #[error("Invalid MCP handshake")]
    InvalidHandshake,

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] crate::domains::resources::ResourceError),

    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
