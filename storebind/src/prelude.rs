//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use storebind::prelude::*;
//! ```

// Graph types
pub use storebind_graph::{
    ModelProperty, ModelType, Registration, StoreRegistry, Type, TypeGraph, TypeId,
};

// Codegen types
pub use storebind_codegen::{
    Artifact, ArtifactSink, CodegenError, DirectoryWriter, MemorySink, StoreGenerator,
    TypeResolver, generate_stores, generate_to_dir,
};
