//! Resources domain.
//!
//! A resource is a static, queryable data record addressed by an opaque
//! string identifier. Resources are registered once at startup and never
//! mutated afterwards; a successful lookup returns the registered record
//! verbatim.

pub mod definitions;
pub mod error;
pub mod registry;

pub use error::ResourceError;
pub use registry::builtin_resources;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A static data record exposed through the capability registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// The resource payload.
    pub data: Map<String, Value>,

    /// Lookup status reported to the caller, always "success" for a
    /// registered record.
    pub status: String,
}

impl Resource {
    /// Create a resource record with the default "success" status.
    pub fn new(data: Map<String, Value>) -> Self {
        Self {
            data,
            status: "success".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_new_sets_success_status() {
        let resource = Resource::new(Map::new());
        assert_eq!(resource.status, "success");
    }

    #[test]
    fn test_resource_serializes_data_and_status() {
        let mut data = Map::new();
        data.insert("version".to_string(), Value::String("1.32.0".to_string()));
        let resource = Resource::new(data);

        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["data"]["version"], "1.32.0");
        assert_eq!(json["status"], "success");
    }
}
