//! Minikube cluster status resource definition.

use serde_json::{Map, json};

use super::ResourceDefinition;
use crate::domains::resources::Resource;

/// Reports the state of the local minikube cluster.
///
/// The backing data is static; a real deployment would substitute a probe
/// against the cluster API.
pub struct MinikubeStatusResource;

impl ResourceDefinition for MinikubeStatusResource {
    const ID: &'static str = "minikube_status";

    fn record() -> Resource {
        let mut data = Map::new();
        data.insert("status".to_string(), json!("running"));
        data.insert("version".to_string(), json!("1.32.0"));
        Resource::new(data)
    }
}
