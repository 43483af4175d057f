//! # CLI
//!
//! Command implementations for the `authz` binary.

pub mod commands;
