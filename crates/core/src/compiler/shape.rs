//! Top-level shape classification.

use crate::document::Schema;

/// The declaration a top-level schema turns into, decided once per definition.
///
/// Variants are listed in priority order; [`SchemaShape::classify`] returns the
/// first one whose discriminator is present.
#[derive(Debug, Clone, Copy)]
pub enum SchemaShape<'a> {
    /// `type: object`. `open` when properties or additional properties are declared.
    Object {
        /// Render as an interface instead of a type alias.
        open: bool,
    },
    /// `enum` present.
    Enum {
        /// Literal values.
        values: &'a [serde_json::Value],
        /// Parallel display names (`x-enumNames`).
        names: Option<&'a [String]>,
    },
    /// `allOf` present.
    AllOf(&'a [Schema]),
    /// `oneOf` present.
    OneOf(&'a [Schema]),
    /// `type: array` with `items`.
    Array(&'a Schema),
    /// `$ref` present.
    Ref(&'a str),
    /// Nothing matched.
    Unknown,
}

impl<'a> SchemaShape<'a> {
    /// Pick the shape of a schema.
    pub fn classify(schema: &'a Schema) -> Self {
        if schema.is_type("object") {
            return Self::Object {
                open: schema.properties.is_some() || schema.has_additional_properties(),
            };
        }
        if let Some(values) = &schema.enum_values {
            return Self::Enum {
                values,
                names: schema.enum_names.as_deref(),
            };
        }
        if let Some(all_of) = &schema.all_of {
            return Self::AllOf(all_of);
        }
        if let Some(one_of) = &schema.one_of {
            return Self::OneOf(one_of);
        }
        if schema.is_type("array")
            && let Some(items) = &schema.items
        {
            return Self::Array(items);
        }
        if let Some(ref_path) = &schema.ref_path {
            return Self::Ref(ref_path);
        }
        Self::Unknown
    }
}
