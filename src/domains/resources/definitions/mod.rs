//! Resource definitions module.
//!
//! Each resource is defined in its own file with its identifier and record.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod minikube_status;

pub use minikube_status::MinikubeStatusResource;

use super::Resource;

/// Trait for resource definitions.
///
/// Each resource implements this trait to provide its identifier and the
/// record returned on lookup.
pub trait ResourceDefinition {
    /// The unique identifier of the resource.
    const ID: &'static str;

    /// Build the record registered under `ID`.
    fn record() -> Resource;
}
