//! Domains module containing capability kinds organized by bounded contexts.
//!
//! Each subdomain defines one capability kind exposed through the
//! dispatcher: its record or handler type, its error type, and the built-in
//! entries seeded into the capability registry at startup.

pub mod prompts;
pub mod resources;
pub mod tools;
