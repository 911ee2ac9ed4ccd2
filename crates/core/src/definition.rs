//! Named definitions: the unit compiled into one declaration.

use std::collections::HashMap;

use tracing::debug;

use crate::document::{ContentHolder, OpenApiDocument, Schema};

/// Media type preferred when a response or request body offers several.
const JSON_MEDIA_TYPE: &str = "application/json";

/// A named schema plus an optional description.
#[derive(Debug, Clone)]
pub struct TypeDefinition {
    /// Raw name as found in the document.
    pub name: String,
    /// The schema to compile.
    pub schema: Schema,
    /// Description that takes precedence over `schema.description`.
    pub description: Option<String>,
}

impl TypeDefinition {
    /// Create a definition without an extra description.
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Collect every named type a document declares.
///
/// Sources, in order: `components.schemas`, Swagger 2 `definitions`,
/// `components.responses` and `components.requestBodies`. Names are sorted
/// within each source so the result does not depend on map iteration order.
pub fn collect_definitions(document: &OpenApiDocument) -> Vec<TypeDefinition> {
    let mut definitions = Vec::new();

    if let Some(components) = &document.components
        && let Some(schemas) = &components.schemas
    {
        definitions.extend(from_schemas(schemas));
    }

    if let Some(schemas) = &document.definitions {
        definitions.extend(from_schemas(schemas));
    }

    if let Some(components) = &document.components {
        for holders in [&components.responses, &components.request_bodies]
            .into_iter()
            .flatten()
        {
            definitions.extend(from_content_holders(holders));
        }
    }

    debug!(count = definitions.len(), "Collected type definitions.");
    definitions
}

fn sorted_entries<T>(map: &HashMap<String, T>) -> Vec<(&String, &T)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries
}

fn from_schemas(schemas: &HashMap<String, Schema>) -> Vec<TypeDefinition> {
    sorted_entries(schemas)
        .into_iter()
        .map(|(name, schema)| TypeDefinition::new(name.clone(), schema.clone()))
        .collect()
}

fn from_content_holders(holders: &HashMap<String, ContentHolder>) -> Vec<TypeDefinition> {
    sorted_entries(holders)
        .into_iter()
        .filter_map(|(name, holder)| {
            let Some(schema) = content_schema(holder) else {
                debug!(name = %name, "Skipping component without a schema.");
                return None;
            };
            let definition = TypeDefinition::new(name.clone(), schema.clone());
            Some(match &holder.description {
                Some(description) => definition.with_description(description.clone()),
                None => definition,
            })
        })
        .collect()
}

/// The JSON schema of a response/request body, or the first schema by media type.
fn content_schema(holder: &ContentHolder) -> Option<&Schema> {
    let content = holder.content.as_ref()?;
    if let Some(schema) = content.get(JSON_MEDIA_TYPE).and_then(|m| m.schema.as_ref()) {
        return Some(schema);
    }
    sorted_entries(content)
        .into_iter()
        .find_map(|(_, media)| media.schema.as_ref())
}
