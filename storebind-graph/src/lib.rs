//! # StoreBind Graph
//!
//! Structural type-graph data model for StoreBind code generation.
//!
//! This crate provides:
//! - An arena ([`TypeGraph`]) owning every type node of one host-supplied graph
//! - Tagged type variants (models, arrays, unions, numeric literals)
//! - The store registration side table ([`StoreRegistry`])

pub mod registry;
pub mod types;

pub use registry::{Registration, StoreRegistry};
pub use types::{ModelProperty, ModelType, Type, TypeGraph, TypeId};
