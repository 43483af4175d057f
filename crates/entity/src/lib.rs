//! # Entity
//!
//! Retrieval of entity aspects.
//!
//! ## Components
//!
//! - `EntityClient` - Port to the entity retrieval service
//! - `InMemoryEntityClient` - Map-backed client, loadable from JSON fixtures

pub mod client;
pub mod in_memory;

pub use client::EntityClient;
pub use in_memory::InMemoryEntityClient;
