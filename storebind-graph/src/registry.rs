//! Store registration side table.
//!
//! The host's analysis pass records which root types are stores and under
//! what collection name. The generator only reads this table; how it was
//! populated is the host's business.

use crate::types::TypeId;

/// A (root type, optional collection name) pair recorded by the host.
#[derive(Debug, Clone)]
pub struct Registration {
    /// Root type of the store. Expected to be a composite model.
    pub root: TypeId,
    /// Explicit collection name, if one was supplied. Defaults to the root
    /// model's own name when absent.
    pub collection: Option<String>,
}

/// Ordered table of store registrations.
#[derive(Debug, Clone, Default)]
pub struct StoreRegistry {
    registrations: Vec<Registration>,
}

impl StoreRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a root type under its model's own name.
    pub fn register(&mut self, root: TypeId) {
        self.registrations.push(Registration {
            root,
            collection: None,
        });
    }

    /// Registers a root type under an explicit collection name.
    pub fn register_as(&mut self, root: TypeId, collection: impl Into<String>) {
        self.registrations.push(Registration {
            root,
            collection: Some(collection.into()),
        });
    }

    /// Iterates registrations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.registrations.iter()
    }

    /// Returns the number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns true if no stores are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl<'a> IntoIterator for &'a StoreRegistry {
    type Item = &'a Registration;
    type IntoIter = std::slice::Iter<'a, Registration>;

    fn into_iter(self) -> Self::IntoIter {
        self.registrations.iter()
    }
}
