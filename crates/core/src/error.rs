//! Error types for document loading and type generation.

use thiserror::Error;

/// Errors raised while loading an OpenAPI document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document is not valid JSON (or does not match the expected shape).
    #[error("Failed to parse OpenAPI document as JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The document is not valid YAML (or does not match the expected shape).
    #[error("Failed to parse OpenAPI document as YAML: {0}")]
    Yaml(#[source] serde_yaml::Error),

    /// The file extension does not name a supported format.
    #[error("Unsupported document format '{0}', expected json, yaml or yml")]
    UnknownFormat(String),
}

/// Errors raised by the rendering primitives for a single schema.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Inline schemas nest deeper than the configured limit.
    #[error("schema nesting exceeds the maximum depth of {max_depth}")]
    DepthExceeded {
        /// The configured limit.
        max_depth: usize,
    },

    /// `x-enumNames` does not line up with `enum`.
    #[error("x-enumNames has {names} entries but enum has {values} values")]
    EnumNamesMismatch {
        /// Number of display names.
        names: usize,
        /// Number of enum values.
        values: usize,
    },

    /// An enum member is an object or an array.
    #[error("enum value at index {index} is not a literal: {value}")]
    UnsupportedEnumValue {
        /// Position in the enum list.
        index: usize,
        /// The offending value, as compact JSON.
        value: String,
    },
}

/// Errors raised while compiling a batch of definitions.
#[derive(Debug, Error)]
pub enum CompileError {
    /// One definition could not be rendered.
    #[error("Failed to generate type '{name}': {source}")]
    Definition {
        /// Raw name of the failing definition.
        name: String,
        /// What went wrong.
        #[source]
        source: RenderError,
    },
}
