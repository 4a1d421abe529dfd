//! Capability registry.
//!
//! The registry holds three independent mappings, one per capability kind
//! (resources, tools, prompts), each from a string identifier to its record
//! or handler. Identifiers are unique within a kind; there is no uniqueness
//! constraint across kinds.
//!
//! A registry is constructed explicitly and injected into the dispatcher at
//! startup. It is read-only after construction, so concurrent lookups need
//! no locking; instances are shared via `Arc`. Entries are never removed or
//! updated post-initialization.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::domains::prompts::{self, Prompt};
use crate::domains::resources::{self, Resource};
use crate::domains::tools::{self, ToolHandler};

/// The kind tag identifying a capability mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityKind {
    Resource,
    Tool,
    Prompt,
}

impl CapabilityKind {
    /// Display name used in log and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resource => "resource",
            Self::Tool => "tool",
            Self::Prompt => "prompt",
        }
    }
}

/// A registered capability, tagged by kind.
///
/// Resources and prompts are plain records returned verbatim; tools carry
/// their invocation handler.
#[derive(Clone)]
pub enum Capability {
    Resource(Resource),
    Tool(Arc<dyn ToolHandler>),
    Prompt(Prompt),
}

impl Capability {
    /// The kind tag of this capability.
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Self::Resource(_) => CapabilityKind::Resource,
            Self::Tool(_) => CapabilityKind::Tool,
            Self::Prompt(_) => CapabilityKind::Prompt,
        }
    }
}

/// Acknowledgment returned for a structurally valid handshake.
///
/// The handshake is stateless: the payload is echoed back and no session or
/// correlation state is retained across calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandshakeAck {
    /// Acknowledgment message.
    pub response: String,

    /// The original payload, echoed verbatim.
    pub data: Value,
}

impl HandshakeAck {
    fn new(data: Value) -> Self {
        Self {
            response: "Mock MCP handshake successful".to_string(),
            data,
        }
    }
}

/// Registry of named capabilities, keyed by identifier within each kind.
pub struct CapabilityRegistry {
    resources: HashMap<String, Resource>,
    tools: HashMap<String, Arc<dyn ToolHandler>>,
    prompts: HashMap<String, Prompt>,
}

impl CapabilityRegistry {
    /// Create a registry builder with no entries.
    pub fn builder() -> CapabilityRegistryBuilder {
        CapabilityRegistryBuilder::default()
    }

    /// Create a registry seeded with the built-in capabilities from the
    /// domain registries.
    pub fn with_defaults() -> Self {
        let mut builder = Self::builder();

        for (id, record) in resources::builtin_resources() {
            builder = builder.register_resource(id, record);
        }
        for (id, handler) in tools::builtin_tools() {
            builder = builder.register_tool(id, handler);
        }
        for (id, record) in prompts::builtin_prompts() {
            builder = builder.register_prompt(id, record);
        }

        builder.build()
    }

    /// Look up a resource by identifier.
    pub fn lookup_resource(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    /// Look up a tool handler by identifier.
    pub fn lookup_tool(&self, id: &str) -> Option<&Arc<dyn ToolHandler>> {
        self.tools.get(id)
    }

    /// Look up a prompt by identifier.
    pub fn lookup_prompt(&self, id: &str) -> Option<&Prompt> {
        self.prompts.get(id)
    }

    /// Look up a capability by kind tag and identifier.
    ///
    /// Exact-match lookup only; absence is a first-class outcome, never a
    /// default value.
    pub fn lookup(&self, kind: CapabilityKind, id: &str) -> Option<Capability> {
        match kind {
            CapabilityKind::Resource => self.lookup_resource(id).cloned().map(Capability::Resource),
            CapabilityKind::Tool => self.lookup_tool(id).cloned().map(Capability::Tool),
            CapabilityKind::Prompt => self.lookup_prompt(id).cloned().map(Capability::Prompt),
        }
    }

    /// Acknowledge a handshake payload.
    ///
    /// Returns `Some` iff the payload is structurally a JSON mapping; this
    /// is a liveness/echo acknowledgment, not a capability lookup.
    pub fn acknowledge_handshake(&self, payload: Option<&Value>) -> Option<HandshakeAck> {
        match payload {
            Some(value) if value.is_object() => Some(HandshakeAck::new(value.clone())),
            _ => None,
        }
    }
}

/// Builder for an explicitly constructed registry.
///
/// Each test constructs its own registry with controlled entries; the
/// production registry is built once in `main` via
/// [`CapabilityRegistry::with_defaults`].
#[derive(Default)]
pub struct CapabilityRegistryBuilder {
    resources: HashMap<String, Resource>,
    tools: HashMap<String, Arc<dyn ToolHandler>>,
    prompts: HashMap<String, Prompt>,
}

impl CapabilityRegistryBuilder {
    /// Register a resource record.
    pub fn register_resource(mut self, id: impl Into<String>, record: Resource) -> Self {
        let id = id.into();
        info!("Registering resource: {id}");
        self.resources.insert(id, record);
        self
    }

    /// Register a tool handler.
    pub fn register_tool(mut self, id: impl Into<String>, handler: Arc<dyn ToolHandler>) -> Self {
        let id = id.into();
        info!("Registering tool: {id}");
        self.tools.insert(id, handler);
        self
    }

    /// Register a prompt record.
    pub fn register_prompt(mut self, id: impl Into<String>, record: Prompt) -> Self {
        let id = id.into();
        info!("Registering prompt: {id}");
        self.prompts.insert(id, record);
        self
    }

    /// Finalize the registry. Mappings are read-only from here on.
    pub fn build(self) -> CapabilityRegistry {
        CapabilityRegistry {
            resources: self.resources,
            tools: self.tools,
            prompts: self.prompts,
        }
    }
}
