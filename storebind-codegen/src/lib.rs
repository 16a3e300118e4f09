//! # StoreBind Codegen
//!
//! TypeScript store-binding generation from structural type graphs.
//!
//! This crate provides:
//! - A memoized type resolver emitting deduplicated `interface` declarations
//! - Stable name synthesis for generic instantiations
//! - Store wrapper class generation per registered root type
//! - Artifact persistence behind the [`ArtifactSink`] trait

pub mod error;
pub mod ts;
pub mod writer;

pub use error::CodegenError;
pub use ts::{Artifact, StoreGenerator, TypeResolver};
pub use writer::{ArtifactSink, DirectoryWriter, MemorySink};

use storebind_graph::{StoreRegistry, TypeGraph};

/// Generates one artifact per registered store.
///
/// # Arguments
/// * `graph` - Type graph supplied by the host
/// * `registry` - Store registrations in registration order
///
/// # Returns
/// Generated artifacts, one per registration, in registration order.
///
/// # Errors
/// Returns `CodegenError` on the first registration whose pass fails.
pub fn generate_stores(
    graph: &TypeGraph,
    registry: &StoreRegistry,
) -> Result<Vec<Artifact>, CodegenError> {
    let generator = StoreGenerator::new(graph, registry);
    let mut artifacts = Vec::with_capacity(registry.len());
    for registration in registry {
        artifacts.push(generator.generate_store(registration)?);
    }
    Ok(artifacts)
}

/// Generates every registered store and writes the artifacts as `.ts` files
/// into the given directory.
///
/// # Returns
/// The number of artifacts written.
///
/// # Errors
/// Returns `CodegenError` if generation or writing fails; artifacts already
/// written stay on disk.
pub fn generate_to_dir(
    graph: &TypeGraph,
    registry: &StoreRegistry,
    dir: impl Into<std::path::PathBuf>,
) -> Result<usize, CodegenError> {
    let generator = StoreGenerator::new(graph, registry);
    let mut writer = DirectoryWriter::new(dir);
    generator.generate_all(&mut writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storebind_graph::ModelProperty;

    #[test]
    fn test_generate_stores_one_artifact_per_registration() {
        let mut graph = TypeGraph::new();
        let string = graph.intrinsic("string");
        let a = graph.model("A", vec![ModelProperty::new("id", string)]);
        let b = graph.model("B", vec![ModelProperty::new("id", string)]);

        let mut registry = StoreRegistry::new();
        registry.register(a);
        registry.register(b);

        let artifacts = generate_stores(&graph, &registry).unwrap();
        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].name, "A");
        assert_eq!(artifacts[1].name, "B");
    }

    #[test]
    fn test_generate_to_dir_writes_files() {
        let mut graph = TypeGraph::new();
        let string = graph.intrinsic("string");
        let pet = graph.model("Pet", vec![ModelProperty::new("name", string)]);

        let mut registry = StoreRegistry::new();
        registry.register_as(pet, "pets");

        let dir = tempfile::tempdir().expect("tempdir");
        let written = generate_to_dir(&graph, &registry, dir.path()).unwrap();

        assert_eq!(written, 1);
        let contents = std::fs::read_to_string(dir.path().join("Pet.ts")).unwrap();
        assert!(contents.contains("export class PetStore"));
    }
}
