//! End-to-end example: generate a `PetStore` binding.
//!
//! Builds a small type graph by hand (standing in for the host compiler),
//! registers `Pet` as a store under the collection name `pets`, and writes the
//! generated TypeScript into `./generated`.
//!
//! Run with: `cargo run --example petstore`

use storebind::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut graph = TypeGraph::new();
    let string = graph.intrinsic("string");
    let int32 = graph.intrinsic("int32");
    let tags = graph.array(string);
    let kind = graph.union(vec![string, int32]);

    let owner = graph.model(
        "Owner",
        vec![
            ModelProperty::new("name", string),
            ModelProperty::optional("phone", string),
        ],
    );
    let pet = graph.model(
        "Pet",
        vec![
            ModelProperty::new("name", string),
            ModelProperty::new("kind", kind),
            ModelProperty::new("owner", owner),
            ModelProperty::optional("tags", tags),
        ],
    );

    let mut registry = StoreRegistry::new();
    registry.register_as(pet, "pets");

    let written = generate_to_dir(&graph, &registry, "generated")?;
    println!("wrote {written} store binding(s) to ./generated");

    Ok(())
}
