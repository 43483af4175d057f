//! # Shared
//!
//! Common types used across the field resolver crates.

pub mod aspect;
pub mod auth;
pub mod config;
pub mod entity;
pub mod error;
pub mod urn;

// Re-exports
pub use aspect::*;
pub use auth::*;
pub use config::*;
pub use entity::*;
pub use error::*;
pub use urn::*;
