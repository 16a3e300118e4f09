//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Intrinsic type name with no entry in the TypeScript mapping table.
    #[error("unknown intrinsic type '{name}'")]
    UnknownIntrinsic {
        /// Intrinsic type name.
        name: String,
    },

    /// Template argument of a kind no naming convention exists for.
    #[error("unsupported template argument of kind '{kind}' on model '{model}'")]
    UnsupportedTemplateArgument {
        /// Base model name.
        model: String,
        /// Kind of the offending argument.
        kind: &'static str,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unknown intrinsic error.
    pub fn unknown_intrinsic(name: impl Into<String>) -> Self {
        Self::UnknownIntrinsic { name: name.into() }
    }
}
