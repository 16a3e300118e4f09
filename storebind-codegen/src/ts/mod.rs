//! TypeScript code generation modules.

pub mod resolver;
pub mod store;

pub use resolver::{TypeResolver, ts_intrinsic};
pub use store::{Artifact, StoreGenerator};
