//! Capability dispatcher.
//!
//! The dispatcher implements the handshake and the three capability
//! operations on top of an injected [`CapabilityRegistry`], translating
//! registry absence into the `NotFound` error for the relevant kind and a
//! structurally invalid handshake payload into `InvalidHandshake`.
//!
//! Every operation is a single-step, stateless request/response: lookups
//! are in-memory, synchronous, and keyed by exact identifier match. There
//! is no session state, no pattern matching, and no fallback chaining. A
//! failed dispatch never affects registry state.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use super::error::{Error, Result};
use super::registry::{Capability, CapabilityKind, CapabilityRegistry, HandshakeAck};
use crate::domains::prompts::{Prompt, PromptError};
use crate::domains::resources::{Resource, ResourceError};
use crate::domains::tools::{ToolError, ToolOutput, ToolRequest};

/// Dispatches handshake and capability operations against a registry.
///
/// Cheap to clone; the registry is shared behind an `Arc` and is read-only,
/// so concurrent dispatches from parallel callers never interfere.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<CapabilityRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(registry: Arc<CapabilityRegistry>) -> Self {
        Self { registry }
    }

    /// Acknowledge a handshake payload.
    ///
    /// Succeeds for any JSON mapping, echoing it back; a missing or
    /// non-mapping payload (e.g. null) is an invalid handshake.
    pub fn handshake(&self, payload: Option<&Value>) -> Result<HandshakeAck> {
        self.registry
            .acknowledge_handshake(payload)
            .ok_or_else(|| {
                warn!("Rejected structurally invalid handshake payload");
                Error::InvalidHandshake
            })
    }

    /// Resolve an identifier against the registry, logging the attempt.
    fn resolve(&self, kind: CapabilityKind, id: &str) -> Option<Capability> {
        info!("Dispatching {} lookup: {id}", kind.name());
        self.registry.lookup(kind, id)
    }

    /// Return the resource registered under `id`.
    pub fn get_resource(&self, id: &str) -> Result<Resource> {
        match self.resolve(CapabilityKind::Resource, id) {
            Some(Capability::Resource(record)) => Ok(record),
            _ => Err(ResourceError::not_found(id).into()),
        }
    }

    /// Invoke the tool registered under `id` with the given request.
    ///
    /// An unregistered identifier is `NotFound`; a handler that accepts the
    /// identifier but fails while executing reports `ExecutionFailed`, a
    /// distinct outcome. The dispatcher never retries.
    pub fn invoke_tool(&self, id: &str, request: &ToolRequest) -> Result<ToolOutput> {
        match self.resolve(CapabilityKind::Tool, id) {
            Some(Capability::Tool(handler)) => Ok(handler.invoke(request)?),
            _ => Err(ToolError::not_found(id).into()),
        }
    }

    /// Return the prompt registered under `id`.
    pub fn get_prompt(&self, id: &str) -> Result<Prompt> {
        match self.resolve(CapabilityKind::Prompt, id) {
            Some(Capability::Prompt(record)) => Ok(record),
            _ => Err(PromptError::not_found(id).into()),
        }
    }
}
