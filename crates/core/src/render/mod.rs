//! Rendering primitives shared by the compiler.
//!
//! - `types`: TypeScript IR (TsType, TsObject, TsTypeDef, ...)
//! - `structural`: schema -> IR lowering
//! - `emit`: IR -> code strings (via the `Emit` trait)
//! - `doc`: JSDoc blocks
//! - `names`: identifier sanitization and `$ref` name extraction

mod doc;
mod emit;
mod names;
mod structural;
mod types;

pub use doc::{DocBlock, DocTag};
pub use emit::Emit;
pub use names::{escape_js_string, extract_reference_name, quote_if_needed, sanitize_name};
pub use structural::{
    RenderContext, literal_from_json, render_all_of, render_enum_members, render_object,
    render_schema,
};
pub use types::{
    TsEnumMember, TsLiteral, TsObject, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind,
};
