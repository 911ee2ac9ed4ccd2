//! Compile OpenAPI schema definitions into TypeScript type declarations.
//!
//! The pipeline is:
//! 1. Parse: document text -> [`OpenApiDocument`]
//! 2. Collect: [`OpenApiDocument`] -> [`TypeDefinition`]s
//! 3. Order: stable sort by name
//! 4. Compile: each definition -> documented `interface` / `type` / `enum` text
//!
//! ```
//! use swagger_ts_core::{CompilerOptions, OpenApiDocument, collect_definitions, compile};
//!
//! let document = OpenApiDocument::from_json(
//!     r#"{ "components": { "schemas": { "Status": { "enum": ["OPEN", "CLOSED"] } } } }"#,
//! )
//! .unwrap();
//! let code = compile(&collect_definitions(&document), &CompilerOptions::default());
//! assert!(code.contains("export enum Status {"));
//! ```

#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

mod compiler;
mod definition;
mod document;
mod error;
mod options;
mod order;
pub mod render;

pub use compiler::{SchemaShape, compile, compile_definition, try_compile};
pub use definition::{TypeDefinition, collect_definitions};
pub use document::{
    AdditionalProperties, Components, ContentHolder, DocumentFormat, MediaType, OpenApiDocument,
    Schema, SchemaType,
};
pub use error::{CompileError, DocumentError, RenderError};
pub use options::{CompilerOptions, DEFAULT_MAX_DEPTH, FailurePolicy, UnknownType};
pub use order::{compare_ascending, order_definitions};
