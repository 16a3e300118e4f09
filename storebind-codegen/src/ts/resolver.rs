//! Memoized type resolution and declaration emission.
//!
//! The resolver walks a single root type and everything reachable from it,
//! producing an inline TypeScript reference for the root plus one standalone
//! `interface` declaration per distinct composite model encountered.
//!
//! Memoization is keyed on [`TypeId`] identity, never on structure: the memo
//! entry for a model is recorded before its properties are resolved, which is
//! what makes cyclic and repeated-reference graphs terminate with exactly one
//! declaration per model.

use std::collections::HashMap;

use storebind_graph::{ModelType, Type, TypeGraph, TypeId};

use crate::error::CodegenError;

/// Maps an intrinsic type name to its TypeScript equivalent.
///
/// The table is closed; any name outside it is an `UnknownIntrinsic` error,
/// never a silent default.
///
/// # Errors
/// Returns `CodegenError::UnknownIntrinsic` if the name has no entry.
pub fn ts_intrinsic(name: &str) -> Result<&'static str, CodegenError> {
    match name {
        "string" => Ok("string"),
        "int16" | "int32" | "float16" | "float32" => Ok("number"),
        "int64" => Ok("bigint"),
        "boolean" => Ok("boolean"),
        _ => Err(CodegenError::unknown_intrinsic(name)),
    }
}

/// Resolver for one emission pass over a single root type.
///
/// Create a fresh resolver per root; the memo table and declaration list are
/// never shared across roots, so a model reachable from two roots is declared
/// once per root.
pub struct TypeResolver<'a> {
    graph: &'a TypeGraph,
    memo: HashMap<TypeId, String>,
    declarations: Vec<String>,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver over the given type graph.
    #[must_use]
    pub fn new(graph: &'a TypeGraph) -> Self {
        Self {
            graph,
            memo: HashMap::new(),
            declarations: Vec::new(),
        }
    }

    /// Resolves a type to its inline TypeScript reference, collecting
    /// declarations for every composite model first reached through it.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownIntrinsic` or
    /// `CodegenError::UnsupportedTemplateArgument`; either aborts the pass.
    pub fn resolve(&mut self, id: TypeId) -> Result<String, CodegenError> {
        if let Some(reference) = self.memo.get(&id) {
            return Ok(reference.clone());
        }

        let reference = match self.graph.get(id) {
            Type::Model(model) if model.intrinsic => ts_intrinsic(&model.name)?.to_string(),
            Type::Model(model) => return self.resolve_model(id, model),
            Type::Array(element) => {
                let element = self.resolve(*element)?;
                format!("{element}[]")
            }
            Type::Union(options) => {
                let refs = options
                    .iter()
                    .map(|&option| self.resolve(option))
                    .collect::<Result<Vec<_>, _>>()?;
                refs.join("|")
            }
            Type::Number(value) => number_literal(*value),
            Type::Unknown => {
                // Known leniency gap: degrade to an opaque reference, no error.
                tracing::debug!("unrecognized type kind at node {}", id.index());
                "{}".to_string()
            }
        };

        self.memo.insert(id, reference.clone());
        Ok(reference)
    }

    /// Resolves a composite model, appending its declaration post-order.
    fn resolve_model(&mut self, id: TypeId, model: &ModelType) -> Result<String, CodegenError> {
        let name = self.declaration_name(model)?;

        // Record the memo entry before recursing into properties so a
        // self-referential model resolves to its own name instead of looping.
        self.memo.insert(id, name.clone());

        let mut fields = Vec::with_capacity(model.properties.len());
        for property in &model.properties {
            let reference = self.resolve(property.ty)?;
            let marker = if property.optional { "?" } else { "" };
            fields.push(format!("  {}{}: {}", property.name, marker, reference));
        }

        let declaration = if fields.is_empty() {
            format!("interface {name} {{}}\n")
        } else {
            format!("interface {name} {{\n{}\n}}\n", fields.join(",\n"))
        };
        self.declarations.push(declaration);

        Ok(name)
    }

    /// Computes the declaration name for a model.
    ///
    /// Plain models use their own name. Template instantiations have no
    /// natural name; theirs is synthesized as the base name followed by each
    /// argument's name in order, with `Array` suffixing array arguments.
    fn declaration_name(&self, model: &ModelType) -> Result<String, CodegenError> {
        if !model.is_template_instantiation() {
            return Ok(model.name.clone());
        }

        let mut name = model.name.clone();
        for &arg in &model.template_args {
            match self.graph.get(arg) {
                Type::Model(m) => name.push_str(&self.declaration_name(m)?),
                Type::Array(element) => match self.graph.get(*element) {
                    Type::Model(m) => {
                        name.push_str(&self.declaration_name(m)?);
                        name.push_str("Array");
                    }
                    other => {
                        return Err(CodegenError::UnsupportedTemplateArgument {
                            model: model.name.clone(),
                            kind: kind_name(other),
                        });
                    }
                },
                other => {
                    return Err(CodegenError::UnsupportedTemplateArgument {
                        model: model.name.clone(),
                        kind: kind_name(other),
                    });
                }
            }
        }
        Ok(name)
    }

    /// Returns the declarations collected so far, in first-discovery order.
    #[must_use]
    pub fn declarations(&self) -> &[String] {
        &self.declarations
    }

    /// Consumes the resolver, returning the collected declarations.
    #[must_use]
    pub fn into_declarations(self) -> Vec<String> {
        self.declarations
    }
}

/// Renders a numeric literal type.
///
/// Integral values within the exact `i64` range drop the fraction; anything
/// larger keeps the `f64` rendering so the digits are never saturated.
/// Non-finite values render as the JavaScript globals `Infinity`,
/// `-Infinity`, and `NaN`.
fn number_literal(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Returns a short kind label for error messages.
fn kind_name(ty: &Type) -> &'static str {
    match ty {
        Type::Model(_) => "Model",
        Type::Array(_) => "Array",
        Type::Union(_) => "Union",
        Type::Number(_) => "Number",
        Type::Unknown => "Unknown",
    }
}
