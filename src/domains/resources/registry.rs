//! Resource registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `builtin_resources()`

use super::Resource;
use super::definitions::{MinikubeStatusResource, ResourceDefinition};

/// All built-in resources as (identifier, record) pairs.
///
/// This is the central place where resources are registered. The capability
/// registry seeds its resource mapping from this list.
pub fn builtin_resources() -> Vec<(&'static str, Resource)> {
    vec![(
        MinikubeStatusResource::ID,
        MinikubeStatusResource::record(),
    )]
}
