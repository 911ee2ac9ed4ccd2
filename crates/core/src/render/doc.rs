//! JSDoc comment blocks.

use crate::document::Schema;

/// A named JSDoc tag such as `@deprecated` or `@example`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTag {
    /// Tag name without the `@`.
    pub name: String,
    /// Text following the tag, if any.
    pub payload: Option<String>,
}

/// Description plus tags, rendered as a `/** ... */` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    /// Free text; may span several lines.
    pub description: Option<String>,
    /// Active tags, in emission order.
    pub tags: Vec<DocTag>,
}

impl DocBlock {
    /// Start a block with an optional description. Blank descriptions are dropped.
    pub fn new(description: Option<&str>) -> Self {
        Self {
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(ToString::to_string),
            tags: Vec::new(),
        }
    }

    /// Add `@name payload` when `active` holds.
    pub fn tag(mut self, name: &str, active: bool, payload: Option<String>) -> Self {
        if active {
            self.tags.push(DocTag {
                name: name.to_string(),
                payload: payload.filter(|p| !p.trim().is_empty()),
            });
        }
        self
    }

    /// Build the block for a schema.
    ///
    /// `description` wins over `schema.description` when it is present and not blank.
    pub fn for_schema(schema: &Schema, description: Option<&str>) -> Self {
        let description = description
            .filter(|d| !d.trim().is_empty())
            .or(schema.description.as_deref());

        Self::new(description)
            .tag(
                "deprecated",
                schema.deprecated.unwrap_or(false),
                schema.deprecated_message.clone(),
            )
            .tag(
                "example",
                schema.example.is_some(),
                schema.example.as_ref().map(|example| match example {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                }),
            )
    }

    /// Nothing to render.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.tags.is_empty()
    }

    /// Render the block with every line prefixed by `indent`, ending in a newline.
    /// An empty block renders as an empty string.
    pub fn render(&self, indent: &str) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut lines: Vec<String> = Vec::new();
        if let Some(description) = &self.description {
            lines.extend(description.lines().map(escape_comment));
        }
        for tag in &self.tags {
            match &tag.payload {
                Some(payload) => {
                    let mut payload_lines = payload.lines().map(escape_comment);
                    let first = payload_lines.next().unwrap_or_default();
                    lines.push(format!("@{} {first}", tag.name));
                    lines.extend(payload_lines);
                }
                None => lines.push(format!("@{}", tag.name)),
            }
        }

        let mut output = format!("{indent}/**\n");
        for line in lines {
            let line = line.trim_end();
            if line.is_empty() {
                output.push_str(&format!("{indent} *\n"));
            } else {
                output.push_str(&format!("{indent} * {line}\n"));
            }
        }
        output.push_str(&format!("{indent} */\n"));
        output
    }
}

/// Keep text from closing the comment early.
fn escape_comment(line: &str) -> String {
    line.replace("*/", "*\\/")
}
