//! OpenAPI document structs for serde deserialization.
//!
//! Only the parts of an OpenAPI 3.x (or Swagger 2) document that carry named
//! schemas are modelled here. Paths and operations are ignored.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::DocumentError;

/// Root OpenAPI document.
#[derive(Debug, Default, Deserialize)]
pub struct OpenApiDocument {
    /// Reusable components (OpenAPI 3.x).
    pub components: Option<Components>,
    /// Named schemas (Swagger 2).
    pub definitions: Option<HashMap<String, Schema>>,
}

/// Components section containing reusable schemas, responses and request bodies.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Named schemas.
    pub schemas: Option<HashMap<String, Schema>>,
    /// Named responses.
    pub responses: Option<HashMap<String, ContentHolder>>,
    /// Named request bodies.
    pub request_bodies: Option<HashMap<String, ContentHolder>>,
}

/// A response or request body: a description plus content per media type.
#[derive(Debug, Default, Deserialize)]
pub struct ContentHolder {
    /// Human readable description.
    pub description: Option<String>,
    /// Content keyed by media type (e.g. `application/json`).
    pub content: Option<HashMap<String, MediaType>>,
}

/// Media type content.
#[derive(Debug, Default, Deserialize)]
pub struct MediaType {
    /// Schema of the payload.
    pub schema: Option<Schema>,
}

/// JSON Schema node as used in OpenAPI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// The type of the schema (string, number, integer, boolean, object, array).
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    /// Reference to another schema.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Properties for object types.
    pub properties: Option<HashMap<String, Schema>>,

    /// Required property names for object types.
    pub required: Option<Vec<String>>,

    /// Item schema for array types.
    pub items: Option<Box<Schema>>,

    /// Enum values. Kept as raw JSON so literal typing survives.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<serde_json::Value>>,

    /// Display names parallel to `enum`.
    #[serde(rename = "x-enumNames")]
    pub enum_names: Option<Vec<String>>,

    /// Union type (any of these schemas).
    #[serde(rename = "anyOf")]
    pub any_of: Option<Vec<Schema>>,

    /// Union type (exactly one of these schemas).
    #[serde(rename = "oneOf")]
    pub one_of: Option<Vec<Schema>>,

    /// Intersection type (all of these schemas combined).
    #[serde(rename = "allOf")]
    pub all_of: Option<Vec<Schema>>,

    /// Additional properties for object types (index signature).
    pub additional_properties: Option<AdditionalProperties>,

    /// Format hint (e.g., date-time, binary).
    pub format: Option<String>,

    /// Constant value - schema matches only this exact value.
    #[serde(rename = "const")]
    pub const_value: Option<serde_json::Value>,

    /// OpenAPI 3.0 nullable flag (3.1 uses type arrays instead).
    pub nullable: Option<bool>,

    /// Short title.
    pub title: Option<String>,

    /// Human readable description.
    pub description: Option<String>,

    /// Deprecation flag.
    pub deprecated: Option<bool>,

    /// Message shown next to `@deprecated`.
    #[serde(rename = "x-deprecatedMessage")]
    pub deprecated_message: Option<String>,

    /// Example value of arbitrary shape.
    pub example: Option<serde_json::Value>,
}

/// Schema type can be a single type or an array of types (for nullable).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// `"type": "string"`
    Single(String),
    /// `"type": ["string", "null"]`
    Multiple(Vec<String>),
}

/// Additional properties can be a boolean or a schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` allows anything, `false` forbids extra keys.
    Bool(bool),
    /// Extra keys must match this schema.
    Schema(Box<Schema>),
}

/// Serialization format of a document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl DocumentFormat {
    /// Guess the format from a file extension.
    pub fn from_extension(ext: &str) -> Result<Self, DocumentError> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(DocumentError::UnknownFormat(other.to_string())),
        }
    }
}

impl OpenApiDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(DocumentError::Json)
    }

    /// Parse a document from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, DocumentError> {
        serde_yaml::from_str(yaml).map_err(DocumentError::Yaml)
    }

    /// Parse a document in the given format.
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self, DocumentError> {
        match format {
            DocumentFormat::Json => Self::from_json(text),
            DocumentFormat::Yaml => Self::from_yaml(text),
        }
    }
}

impl Schema {
    /// `type` is exactly the given single string.
    pub fn is_type(&self, name: &str) -> bool {
        matches!(&self.schema_type, Some(SchemaType::Single(t)) if t == name)
    }

    /// Whether the schema declares extra object keys. `additionalProperties: false` does not count.
    pub fn has_additional_properties(&self) -> bool {
        !matches!(
            self.additional_properties,
            None | Some(AdditionalProperties::Bool(false))
        )
    }
}
