//! Lowering of schema nodes into TypeScript IR.
//!
//! This is the structural half of the renderer: it knows nothing about
//! declarations, only how an (arbitrarily nested) schema reads as a type.

use std::collections::HashSet;
use tracing::warn;

use crate::document::{AdditionalProperties, Schema, SchemaType};
use crate::error::RenderError;
use crate::options::{CompilerOptions, UnknownType};

use super::doc::DocBlock;
use super::names::{extract_reference_name, quote_if_needed};
use super::types::{TsEnumMember, TsLiteral, TsObject, TsPrimitive, TsProp, TsType};

/// Rendering state threaded through recursive calls.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    options: &'a CompilerOptions,
    depth: usize,
}

impl<'a> RenderContext<'a> {
    /// Context for a top-level schema.
    pub fn new(options: &'a CompilerOptions) -> Self {
        Self { options, depth: 0 }
    }

    /// Context for a nested schema, failing once the depth limit is passed.
    fn nested(self) -> Result<Self, RenderError> {
        let depth = self.depth + 1;
        if depth > self.options.max_depth {
            return Err(RenderError::DepthExceeded {
                max_depth: self.options.max_depth,
            });
        }
        Ok(Self { depth, ..self })
    }

    /// The configured fallback type.
    pub fn unknown(&self) -> TsType {
        TsType::Primitive(match self.options.unknown_type {
            UnknownType::Any => TsPrimitive::Any,
            UnknownType::Unknown => TsPrimitive::Unknown,
        })
    }
}

/// Convert a schema to a TypeScript type.
pub fn render_schema(schema: &Schema, ctx: RenderContext<'_>) -> Result<TsType, RenderError> {
    let ty = render_shape(schema, ctx)?;
    if schema.nullable == Some(true) && !ty.admits_null() {
        return Ok(TsType::Union(vec![ty, TsType::Primitive(TsPrimitive::Null)]));
    }
    Ok(ty)
}

fn render_shape(schema: &Schema, ctx: RenderContext<'_>) -> Result<TsType, RenderError> {
    if let Some(ref_path) = &schema.ref_path {
        return Ok(TsType::Ref(extract_reference_name(ref_path)));
    }

    if let Some(const_value) = &schema.const_value {
        return Ok(literal_from_json(0, const_value)
            .map_or_else(|_| ctx.unknown(), TsType::Literal));
    }

    if let Some(all_of) = &schema.all_of {
        return render_all_of(all_of, ctx);
    }

    if let Some(any_of) = &schema.any_of {
        return render_union(any_of, ctx);
    }

    if let Some(one_of) = &schema.one_of {
        return render_union(one_of, ctx);
    }

    if let Some(values) = &schema.enum_values
        && !schema.is_type("object")
    {
        return literal_union(values);
    }

    match &schema.schema_type {
        Some(SchemaType::Single(t)) => render_type_name(t, schema, ctx),
        Some(SchemaType::Multiple(types)) => {
            let mut ts_types = types
                .iter()
                .map(|t| render_type_name(t, schema, ctx))
                .collect::<Result<Vec<_>, _>>()?;
            if ts_types.len() == 1 {
                Ok(ts_types.remove(0))
            } else if ts_types.is_empty() {
                Ok(ctx.unknown())
            } else {
                Ok(TsType::Union(ts_types))
            }
        }
        None => {
            if schema.properties.is_some() || schema.additional_properties.is_some() {
                Ok(TsType::Object(render_object(schema, ctx)?))
            } else if let Some(items) = &schema.items {
                Ok(TsType::Array(Box::new(render_schema(items, ctx.nested()?)?)))
            } else {
                Ok(ctx.unknown())
            }
        }
    }
}

fn render_type_name(
    type_name: &str,
    schema: &Schema,
    ctx: RenderContext<'_>,
) -> Result<TsType, RenderError> {
    let ty = match type_name {
        "string" if schema.format.as_deref() == Some("binary") => TsType::Ref("Blob".into()),
        "string" => TsType::Primitive(TsPrimitive::String),
        "number" | "integer" => TsType::Primitive(TsPrimitive::Number),
        "boolean" => TsType::Primitive(TsPrimitive::Boolean),
        "null" => TsType::Primitive(TsPrimitive::Null),
        "file" => TsType::Ref("Blob".into()),
        "array" => match &schema.items {
            Some(items) => TsType::Array(Box::new(render_schema(items, ctx.nested()?)?)),
            None => TsType::Array(Box::new(ctx.unknown())),
        },
        "object" => TsType::Object(render_object(schema, ctx)?),
        _ => ctx.unknown(),
    };
    Ok(ty)
}

/// Render the parts of an `allOf` as one intersection.
pub fn render_all_of(parts: &[Schema], ctx: RenderContext<'_>) -> Result<TsType, RenderError> {
    let nested = ctx.nested()?;
    let mut types = parts
        .iter()
        .map(|part| render_schema(part, nested))
        .collect::<Result<Vec<_>, _>>()?;

    match types.len() {
        0 => Ok(ctx.unknown()),
        1 => Ok(types.remove(0)),
        _ => Ok(TsType::Intersection(types)),
    }
}

fn render_union(parts: &[Schema], ctx: RenderContext<'_>) -> Result<TsType, RenderError> {
    let nested = ctx.nested()?;
    let mut types = parts
        .iter()
        .map(|part| render_schema(part, nested))
        .collect::<Result<Vec<_>, _>>()?;

    match types.len() {
        0 => Ok(ctx.unknown()),
        1 => Ok(types.remove(0)),
        _ => Ok(TsType::Union(types)),
    }
}

/// Render the object shape of a schema: sorted properties plus index signature.
pub fn render_object(schema: &Schema, ctx: RenderContext<'_>) -> Result<TsObject, RenderError> {
    let nested = ctx.nested()?;

    let mut props = Vec::new();
    if let Some(properties) = &schema.properties {
        let required = schema.required.as_deref().unwrap_or_default();

        // Sort for deterministic output
        let mut names: Vec<_> = properties.keys().collect();
        names.sort();

        for name in names {
            let Some(prop_schema) = properties.get(name) else {
                continue;
            };
            props.push(TsProp {
                name: name.clone(),
                ty: render_schema(prop_schema, nested)?,
                optional: !required.contains(name),
                doc: DocBlock::for_schema(prop_schema, None),
            });
        }
    }

    let index = match &schema.additional_properties {
        None if schema.properties.is_none() => Some(ctx.unknown()),
        None | Some(AdditionalProperties::Bool(false)) => None,
        Some(AdditionalProperties::Bool(true)) => Some(ctx.unknown()),
        Some(AdditionalProperties::Schema(value)) => Some(render_schema(value, nested)?),
    };

    Ok(TsObject {
        props,
        index: index.map(Box::new),
    })
}

/// Convert a JSON literal to a TypeScript literal. Objects and arrays are rejected.
pub fn literal_from_json(
    index: usize,
    value: &serde_json::Value,
) -> Result<TsLiteral, RenderError> {
    match value {
        serde_json::Value::Null => Ok(TsLiteral::Null),
        serde_json::Value::Bool(b) => Ok(TsLiteral::Bool(*b)),
        serde_json::Value::Number(n) => Ok(TsLiteral::Number(n.clone())),
        serde_json::Value::String(s) => Ok(TsLiteral::String(s.clone())),
        other => Err(RenderError::UnsupportedEnumValue {
            index,
            value: other.to_string(),
        }),
    }
}

fn literal_union(values: &[serde_json::Value]) -> Result<TsType, RenderError> {
    let mut types = values
        .iter()
        .enumerate()
        .map(|(i, v)| literal_from_json(i, v).map(TsType::Literal))
        .collect::<Result<Vec<_>, _>>()?;

    if types.len() == 1 {
        return Ok(types.remove(0));
    }
    Ok(TsType::Union(types))
}

/// Build the members of an `enum` declaration.
///
/// Member names come from `names` when given, otherwise from the value itself.
/// Extra names are ignored; too few names is an error. A name that repeats an
/// earlier member gets a numeric suffix (`"1"`, `"1_2"`).
pub fn render_enum_members(
    values: &[serde_json::Value],
    names: Option<&[String]>,
) -> Result<Vec<TsEnumMember>, RenderError> {
    if let Some(names) = names
        && names.len() < values.len()
    {
        return Err(RenderError::EnumNamesMismatch {
            names: names.len(),
            values: values.len(),
        });
    }

    let mut seen = HashSet::new();
    let mut members = Vec::with_capacity(values.len());
    for (i, value) in values.iter().enumerate() {
        let literal = literal_from_json(i, value)?;
        let base = match names.and_then(|names| names.get(i)) {
            Some(name) => name.clone(),
            None => match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            },
        };

        let mut name = base.clone();
        let mut suffix = 2;
        while !seen.insert(name.clone()) {
            name = format!("{base}_{suffix}");
            suffix += 1;
        }
        if name != base {
            warn!(member = %base, renamed = %name, "Renamed duplicate enum member.");
        }

        members.push(TsEnumMember {
            name: quote_if_needed(&name),
            value: literal,
        });
    }
    Ok(members)
}
