//! CLI Commands

pub mod context;
pub mod field_types;
pub mod resolve;

pub use context::build_factory;
pub use field_types::FieldTypesCommand;
pub use resolve::ResolveCommand;
