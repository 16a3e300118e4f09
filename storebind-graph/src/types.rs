//! Type-graph node definitions.
//!
//! This module contains the data structures representing the structural type
//! graph handed to the code generator: models with ordered properties, arrays,
//! unions, numeric literal types, and the arena that owns them.

/// Handle identifying a type node within a [`TypeGraph`].
///
/// The handle itself is the type's identity: two structurally identical nodes
/// added separately receive distinct ids and remain distinct types for
/// memoization and declaration purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(usize);

impl TypeId {
    /// Returns the underlying arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Type node variants.
#[derive(Debug, Clone)]
pub enum Type {
    /// Named structural type (composite or intrinsic).
    Model(ModelType),
    /// Array of a single element type.
    Array(TypeId),
    /// Union over an ordered list of option types.
    Union(Vec<TypeId>),
    /// Numeric literal type (a single value, not a type family).
    Number(f64),
    /// A kind the host supplied that the generator does not recognize.
    Unknown,
}

impl Type {
    /// Returns the model payload if this is a model node.
    #[must_use]
    pub fn as_model(&self) -> Option<&ModelType> {
        match self {
            Self::Model(m) => Some(m),
            _ => None,
        }
    }

    /// Returns true if this is a model node.
    #[must_use]
    pub const fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }
}

/// Named structural type with an ordered set of properties.
#[derive(Debug, Clone)]
pub struct ModelType {
    /// Model name. For template instantiations this is the base name; the
    /// declaration name is synthesized from it plus the argument names.
    pub name: String,
    /// Properties in declaration order.
    pub properties: Vec<ModelProperty>,
    /// Concrete template arguments, empty for plain models.
    pub template_args: Vec<TypeId>,
    /// True for primitive types recognized by name (`string`, `int32`, ...).
    pub intrinsic: bool,
}

impl ModelType {
    /// Returns true if this model was produced by instantiating a
    /// parameterized template with concrete arguments.
    #[must_use]
    pub fn is_template_instantiation(&self) -> bool {
        !self.template_args.is_empty()
    }
}

/// Property belonging to exactly one model.
#[derive(Debug, Clone)]
pub struct ModelProperty {
    /// Property name.
    pub name: String,
    /// Property type.
    pub ty: TypeId,
    /// True if the property may be absent on instances.
    pub optional: bool,
}

impl ModelProperty {
    /// Creates a required property.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    /// Creates an optional property.
    #[must_use]
    pub fn optional(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: true,
        }
    }
}

/// Arena owning every type node of one host-supplied graph.
///
/// All [`TypeId`] handles are minted by this graph; looking up a handle from a
/// different graph is a caller bug and may panic or return an unrelated node.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    nodes: Vec<Type>,
}

impl TypeGraph {
    /// Creates an empty type graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.nodes.len());
        self.nodes.push(ty);
        id
    }

    /// Adds an intrinsic (primitive) type recognized by name.
    pub fn intrinsic(&mut self, name: impl Into<String>) -> TypeId {
        self.add(Type::Model(ModelType {
            name: name.into(),
            properties: Vec::new(),
            template_args: Vec::new(),
            intrinsic: true,
        }))
    }

    /// Adds a composite model with the given properties.
    pub fn model(&mut self, name: impl Into<String>, properties: Vec<ModelProperty>) -> TypeId {
        self.add(Type::Model(ModelType {
            name: name.into(),
            properties,
            template_args: Vec::new(),
            intrinsic: false,
        }))
    }

    /// Adds a template instantiation: a model produced by binding concrete
    /// arguments to a parameterized base definition.
    pub fn generic_model(
        &mut self,
        base_name: impl Into<String>,
        template_args: Vec<TypeId>,
        properties: Vec<ModelProperty>,
    ) -> TypeId {
        self.add(Type::Model(ModelType {
            name: base_name.into(),
            properties,
            template_args,
            intrinsic: false,
        }))
    }

    /// Adds an array type over the given element type.
    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.add(Type::Array(element))
    }

    /// Adds a union type over the given options, in order.
    pub fn union(&mut self, options: Vec<TypeId>) -> TypeId {
        self.add(Type::Union(options))
    }

    /// Adds a numeric literal type.
    pub fn number(&mut self, value: f64) -> TypeId {
        self.add(Type::Number(value))
    }

    /// Adds a node of a kind the generator does not recognize.
    pub fn unknown(&mut self) -> TypeId {
        self.add(Type::Unknown)
    }

    /// Appends a property to an existing model.
    ///
    /// This is how the host wires up self-referential models: create the model
    /// first, then add properties that point back at its id.
    ///
    /// # Panics
    /// Panics if `model` does not refer to a model node.
    pub fn add_property(&mut self, model: TypeId, property: ModelProperty) {
        match &mut self.nodes[model.index()] {
            Type::Model(m) => m.properties.push(property),
            other => panic!("add_property on non-model node {other:?}"),
        }
    }

    /// Looks up a type node by id.
    #[must_use]
    pub fn get(&self, id: TypeId) -> &Type {
        &self.nodes[id.index()]
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structurally_identical_models_are_distinct() {
        let mut graph = TypeGraph::new();
        let string = graph.intrinsic("string");
        let a = graph.model("Point", vec![ModelProperty::new("x", string)]);
        let b = graph.model("Point", vec![ModelProperty::new("x", string)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_add_property_builds_cycle() {
        let mut graph = TypeGraph::new();
        let node = graph.model("Node", Vec::new());
        graph.add_property(node, ModelProperty::optional("next", node));

        let model = graph.get(node).as_model().expect("model node");
        assert_eq!(model.properties.len(), 1);
        assert_eq!(model.properties[0].ty, node);
        assert!(model.properties[0].optional);
    }

    #[test]
    fn test_intrinsic_has_no_properties() {
        let mut graph = TypeGraph::new();
        let id = graph.intrinsic("int32");
        let model = graph.get(id).as_model().expect("model node");
        assert!(model.intrinsic);
        assert!(model.properties.is_empty());
        assert!(!model.is_template_instantiation());
    }

    #[test]
    fn test_generic_model_records_arguments() {
        let mut graph = TypeGraph::new();
        let string = graph.intrinsic("string");
        let user = graph.model("User", vec![ModelProperty::new("name", string)]);
        let page = graph.generic_model(
            "Page",
            vec![user],
            vec![ModelProperty::new("items", user)],
        );

        let model = graph.get(page).as_model().expect("model node");
        assert!(model.is_template_instantiation());
        assert_eq!(model.template_args, vec![user]);
        assert_eq!(model.name, "Page");
    }

    #[test]
    fn test_union_and_array_nodes() {
        let mut graph = TypeGraph::new();
        let string = graph.intrinsic("string");
        let arr = graph.array(string);
        let uni = graph.union(vec![string, arr]);

        assert!(matches!(graph.get(arr), Type::Array(e) if *e == string));
        assert!(matches!(graph.get(uni), Type::Union(opts) if opts.len() == 2));
        assert_eq!(graph.len(), 3);
        assert!(!graph.is_empty());
    }
}
