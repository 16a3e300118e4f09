//! # StoreBind
//!
//! TypeScript document-store binding generator from structural type graphs.
//!
//! StoreBind resolves a host-supplied graph of type definitions (models,
//! arrays, unions, numeric literals, intrinsics) into deduplicated TypeScript
//! `interface` declarations and wraps each registered root type in a fixed
//! store-client class.
//!
//! ## Quick Start
//!
//! ```
//! use storebind::prelude::*;
//!
//! let mut graph = TypeGraph::new();
//! let string = graph.intrinsic("string");
//! let pet = graph.model("Pet", vec![ModelProperty::new("name", string)]);
//!
//! let mut registry = StoreRegistry::new();
//! registry.register_as(pet, "pets");
//!
//! let artifacts = generate_stores(&graph, &registry)?;
//! assert!(artifacts[0].contents.contains("export class PetStore"));
//! # Ok::<(), storebind::codegen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`graph`] - Type-graph arena, node variants, and store registrations
//! - [`codegen`] - Memoized resolver/emitter, store wrapper builder, writers

pub mod prelude;

/// Type-graph data model and store registrations.
pub mod graph {
    pub use storebind_graph::*;
}

/// TypeScript code generation.
pub mod codegen {
    pub use storebind_codegen::*;
}

pub use storebind_codegen::{generate_stores, generate_to_dir};
