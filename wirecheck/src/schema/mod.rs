//! Schema model: declarations, input loading, and the resolved graph.
//!
//! This module provides:
//! - Declaration types with builder-style construction
//! - JSON document loading and compact signature parsing
//! - The resolved, immutable `SchemaGraph` that rules evaluate against

mod decl;
mod graph;
mod loader;
mod signature;

pub use decl::{
    is_primitive_type_name, FieldDeclaration, FieldKind, InclusionDeclaration,
    OperationDeclaration, ParamDeclaration, TypeDeclaration,
};
pub use graph::SchemaGraph;
pub use loader::{from_json_str, from_path, SchemaDocument};
pub use signature::parse_signature;
