//! Store declaration building.
//!
//! For each registration this module resolves the root type with a fresh
//! [`TypeResolver`], wraps the result in the fixed store-client class
//! template, and hands the combined artifact to the output sink. Nothing is
//! shared between registrations; a model reachable from two roots is declared
//! once per artifact.

use storebind_graph::{Registration, StoreRegistry, TypeGraph};

use crate::error::CodegenError;
use crate::ts::resolver::TypeResolver;
use crate::writer::ArtifactSink;

/// One generated textual unit, keyed by its root model's name.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Root model declaration name.
    pub name: String,
    /// Full artifact text: wrapper class followed by type declarations.
    pub contents: String,
}

/// Generator producing one store artifact per registration.
pub struct StoreGenerator<'a> {
    graph: &'a TypeGraph,
    registry: &'a StoreRegistry,
}

impl<'a> StoreGenerator<'a> {
    /// Creates a generator over the given graph and registration table.
    #[must_use]
    pub fn new(graph: &'a TypeGraph, registry: &'a StoreRegistry) -> Self {
        Self { graph, registry }
    }

    /// Generates the artifact for a single registration.
    ///
    /// # Errors
    /// Returns `CodegenError` if the root is not a composite model or if
    /// resolution hits an unknown intrinsic or an unsupported template
    /// argument. Only this registration's pass is affected.
    pub fn generate_store(&self, registration: &Registration) -> Result<Artifact, CodegenError> {
        let root = self.graph.get(registration.root);
        if !root.as_model().is_some_and(|m| !m.intrinsic) {
            return Err(CodegenError::generation(
                "store root must be a composite model",
            ));
        }

        let mut resolver = TypeResolver::new(self.graph);
        let name = resolver.resolve(registration.root)?;
        let collection = registration.collection.as_deref().unwrap_or(&name);

        let mut contents = store_class(&name, collection);
        let declarations = resolver.into_declarations();
        let count = declarations.len();
        for declaration in declarations {
            contents.push('\n');
            contents.push_str(&declaration);
        }

        tracing::info!("Generated store '{}Store' ({} declarations)", name, count);

        Ok(Artifact { name, contents })
    }

    /// Generates and writes every registered store, strictly in order.
    ///
    /// Each artifact is written before the next registration starts. On
    /// failure the run stops at the failing registration; artifacts already
    /// written stay written.
    ///
    /// # Errors
    /// Returns the first `CodegenError` encountered.
    pub fn generate_all(&self, sink: &mut dyn ArtifactSink) -> Result<usize, CodegenError> {
        let mut written = 0;
        for registration in self.registry {
            let artifact = self.generate_store(registration)?;
            sink.write(&artifact.name, &artifact.contents)?;
            written += 1;
        }
        Ok(written)
    }
}

/// Builds the fixed store wrapper class for a root type.
///
/// The template is parameterized only by the root type name and the default
/// collection name; its shape never varies.
fn store_class(type_name: &str, collection: &str) -> String {
    let mut output = String::new();

    output.push_str("import { MongoClient, Collection } from \"mongodb\";\n\n");
    output.push_str(&format!("export class {type_name}Store {{\n"));
    output.push_str(&format!(
        "  private collection!: Collection<{type_name}>;\n\n"
    ));
    output.push_str("  constructor(\n");
    output.push_str("    private client: MongoClient,\n");
    output.push_str("    private dbName: string,\n");
    output.push_str(&format!(
        "    private collectionName: string = \"{collection}\",\n"
    ));
    output.push_str("  ) {}\n\n");

    output.push_str("  async init(): Promise<void> {\n");
    output.push_str("    const db = this.client.db(this.dbName);\n");
    output.push_str(
        "    const existing = await db.listCollections({ name: this.collectionName }).toArray();\n",
    );
    output.push_str("    if (existing.length === 0) {\n");
    output.push_str("      await db.createCollection(this.collectionName);\n");
    output.push_str("    }\n");
    output.push_str(&format!(
        "    this.collection = db.collection<{type_name}>(this.collectionName);\n"
    ));
    output.push_str("  }\n\n");

    output.push_str(&format!(
        "  async get(id: string): Promise<{type_name} | undefined> {{\n"
    ));
    output.push_str("    const result = await this.collection.findOne({ _id: id } as object);\n");
    output.push_str(&format!(
        "    return result === null ? undefined : (result as {type_name});\n"
    ));
    output.push_str("  }\n");
    output.push_str("}\n");

    output
}
