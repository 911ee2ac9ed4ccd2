//! Type declaration compiler.
//!
//! Turns a batch of [`TypeDefinition`]s into TypeScript declarations: each
//! definition is classified once into a [`SchemaShape`], lowered into a
//! [`TsTypeDef`] and emitted with its documentation block.

mod shape;

pub use shape::SchemaShape;

use std::collections::HashMap;
use tracing::{debug, error, warn};

use crate::definition::TypeDefinition;
use crate::error::{CompileError, RenderError};
use crate::options::{CompilerOptions, FailurePolicy};
use crate::order::order_definitions;
use crate::render::{
    DocBlock, Emit, RenderContext, TsType, TsTypeDef, TypeDefKind, extract_reference_name,
    render_all_of, render_enum_members, render_object, render_schema, sanitize_name,
};

/// Compile definitions into TypeScript source text.
///
/// Never fails. Under [`FailurePolicy::AllOrNothing`] any error is logged and
/// an empty string is returned; under [`FailurePolicy::Isolate`] a failing
/// definition is replaced by a fallback alias.
pub fn compile(definitions: &[TypeDefinition], options: &CompilerOptions) -> String {
    match try_compile(definitions, options) {
        Ok(code) => code,
        Err(err) => {
            error!(
                error = %err,
                definitions = definitions.len(),
                "Type generation failed; discarding the whole batch."
            );
            String::new()
        }
    }
}

/// Compile definitions, reporting the first failure.
///
/// Under [`FailurePolicy::Isolate`] this never returns an error.
pub fn try_compile(
    definitions: &[TypeDefinition],
    options: &CompilerOptions,
) -> Result<String, CompileError> {
    let mut declarations = Vec::with_capacity(definitions.len());
    let mut emitted_names: HashMap<String, &str> = HashMap::new();

    for definition in order_definitions(definitions) {
        let emitted = sanitize_name(&definition.name);
        if let Some(previous) = emitted_names.insert(emitted.clone(), &definition.name) {
            warn!(
                name = %definition.name,
                previous = %previous,
                emitted = %emitted,
                "Definitions share an emitted type name."
            );
        }

        let declaration = match compile_definition(definition, options) {
            Ok(type_def) => type_def.emit(),
            Err(source) => match options.failure_policy {
                FailurePolicy::AllOrNothing => {
                    return Err(CompileError::Definition {
                        name: definition.name.clone(),
                        source,
                    });
                }
                FailurePolicy::Isolate => {
                    warn!(
                        name = %definition.name,
                        error = %source,
                        "Replacing definition with a fallback type."
                    );
                    fallback_definition(definition, &source, options).emit()
                }
            },
        };
        declarations.push(declaration);
    }

    debug!(count = declarations.len(), "Compiled type declarations.");
    Ok(declarations.join("\n"))
}

/// Lower one definition into a declaration.
pub fn compile_definition(
    definition: &TypeDefinition,
    options: &CompilerOptions,
) -> Result<TsTypeDef, RenderError> {
    let schema = &definition.schema;
    let ctx = RenderContext::new(options);

    let kind = match SchemaShape::classify(schema) {
        SchemaShape::Object { open } => {
            let object = render_object(schema, ctx)?;
            if open {
                TypeDefKind::Interface(object)
            } else {
                TypeDefKind::TypeAlias(TsType::Object(object))
            }
        }
        SchemaShape::Enum { values, names } => {
            TypeDefKind::Enum(render_enum_members(values, names)?)
        }
        SchemaShape::AllOf(parts) => TypeDefKind::TypeAlias(render_all_of(parts, ctx)?),
        SchemaShape::OneOf([]) => TypeDefKind::TypeAlias(ctx.unknown()),
        SchemaShape::OneOf(parts) => TypeDefKind::TypeAlias(TsType::Union(
            parts
                .iter()
                .map(|part| render_schema(part, ctx))
                .collect::<Result<Vec<_>, _>>()?,
        )),
        SchemaShape::Array(items) => {
            TypeDefKind::TypeAlias(TsType::Array(Box::new(render_schema(items, ctx)?)))
        }
        SchemaShape::Ref(ref_path) => {
            TypeDefKind::TypeAlias(TsType::Ref(extract_reference_name(ref_path)))
        }
        SchemaShape::Unknown => TypeDefKind::TypeAlias(ctx.unknown()),
    };

    Ok(TsTypeDef {
        name: sanitize_name(&definition.name),
        doc: DocBlock::for_schema(schema, definition.description.as_deref()),
        kind,
    })
}

fn fallback_definition(
    definition: &TypeDefinition,
    err: &RenderError,
    options: &CompilerOptions,
) -> TsTypeDef {
    TsTypeDef {
        name: sanitize_name(&definition.name),
        doc: DocBlock::new(Some(format!("Type generation failed: {err}").as_str())),
        kind: TypeDefKind::TypeAlias(RenderContext::new(options).unknown()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::document::Schema;
    use crate::options::UnknownType;

    fn def(name: &str, json: &str) -> TypeDefinition {
        let schema: Schema = serde_json::from_str(json).unwrap();
        TypeDefinition::new(name, schema)
    }

    fn compile_default(definitions: &[TypeDefinition]) -> String {
        compile(definitions, &CompilerOptions::default())
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(compile_default(&[]), "");
    }

    #[test]
    fn test_pet_and_status_scenario() {
        let defs = vec![
            def(
                "Pet",
                r#"{ "type": "object", "properties": { "name": { "type": "string" } } }"#,
            ),
            def("Status", r#"{ "enum": ["OPEN", "CLOSED"] }"#),
        ];
        let code = compile_default(&defs);
        println!("=== GENERATED CODE ===\n{code}\n=== END ===");

        assert_eq!(
            code,
            "export interface Pet {\n  name?: string;\n}\n\nexport enum Status {\n  OPEN = \"OPEN\",\n  CLOSED = \"CLOSED\",\n}\n"
        );
    }

    #[test]
    fn test_closed_object_alias() {
        let code = compile_default(&[def("Bag", r#"{ "type": "object" }"#)]);
        assert_eq!(code, "export type Bag = {\n  [key: string]: any;\n};\n");
    }

    #[test]
    fn test_open_object_with_required_and_docs() {
        let code = compile_default(&[def(
            "User",
            r#"{
  "type": "object",
  "description": "A registered user",
  "required": ["id"],
  "properties": {
    "id": { "type": "integer", "description": "Primary key" },
    "nickname": { "type": "string", "deprecated": true }
  },
  "additionalProperties": { "type": "string" }
}"#,
        )]);

        assert!(code.starts_with("/**\n * A registered user\n */\nexport interface User {\n"));
        assert!(code.contains("  /**\n   * Primary key\n   */\n  id: number;\n"));
        assert!(code.contains("  /**\n   * @deprecated\n   */\n  nickname?: string;\n"));
        assert!(code.contains("  [key: string]: string;\n}"));
    }

    #[test]
    fn test_object_beats_enum() {
        let code = compile_default(&[def(
            "Mixed",
            r#"{ "type": "object", "enum": ["A"], "properties": { "a": { "type": "string" } } }"#,
        )]);
        assert!(code.contains("export interface Mixed {"), "{code}");
        assert!(!code.contains("enum"), "{code}");
    }

    #[test]
    fn test_enum_literal_typing() {
        let code = compile_default(&[def("Kind", r#"{ "enum": ["A", 1] }"#)]);
        assert!(code.contains("  A = \"A\",\n"), "{code}");
        assert!(code.contains("  \"1\" = 1,\n"), "{code}");
    }

    #[test]
    fn test_enum_display_names() {
        let code = compile_default(&[def(
            "Priority",
            r#"{ "type": "integer", "enum": [0, 1], "x-enumNames": ["Low", "High"] }"#,
        )]);
        assert_eq!(code, "export enum Priority {\n  Low = 0,\n  High = 1,\n}\n");
    }

    #[test]
    fn test_all_of_intersection() {
        let code = compile_default(&[def(
            "Dog",
            r##"{ "allOf": [{ "$ref": "#/components/schemas/Pet" }, { "type": "object", "properties": { "bark": { "type": "boolean" } } }] }"##,
        )]);
        assert_eq!(code, "export type Dog = Pet & { bark?: boolean };\n");
    }

    #[test]
    fn test_one_of_union_preserves_order() {
        let code = compile_default(&[def(
            "Shape",
            r##"{ "oneOf": [{ "$ref": "#/components/schemas/Square" }, { "$ref": "#/components/schemas/Circle" }, { "type": "string" }] }"##,
        )]);
        assert_eq!(code, "export type Shape = Square | Circle | string;\n");
    }

    #[test]
    fn test_array_alias() {
        let code = compile_default(&[def(
            "Pets",
            r##"{ "type": "array", "items": { "$ref": "#/components/schemas/Pet" } }"##,
        )]);
        assert_eq!(code, "export type Pets = Pet[];\n");

        let code = compile_default(&[def(
            "Ids",
            r#"{ "type": "array", "items": { "oneOf": [{ "type": "string" }, { "type": "integer" }] } }"#,
        )]);
        assert_eq!(code, "export type Ids = (string | number)[];\n");
    }

    #[test]
    fn test_ref_alias() {
        let code = compile_default(&[def(
            "PetAlias",
            r##"{ "$ref": "#/components/schemas/Pet.Model" }"##,
        )]);
        assert_eq!(code, "export type PetAlias = PetModel;\n");
    }

    #[test]
    fn test_fallback_safety() {
        let code = compile_default(&[
            def("Anything", "{}"),
            def("Text", r#"{ "type": "string", "description": "Free text" }"#),
        ]);
        assert_eq!(
            code,
            "export type Anything = any;\n\n/**\n * Free text\n */\nexport type Text = any;\n"
        );

        let options = CompilerOptions {
            unknown_type: UnknownType::Unknown,
            ..CompilerOptions::default()
        };
        assert_eq!(
            compile(&[def("Anything", "{}")], &options),
            "export type Anything = unknown;\n"
        );
    }

    #[test]
    fn test_name_sanitization() {
        let code = compile_default(&[def("Page«Pet»", r#"{ "type": "object" }"#)]);
        assert!(code.contains("export type PagePet = "), "{code}");
    }

    #[test]
    fn test_definition_description_precedence() {
        let defs = vec![
            def("A", r#"{ "description": "schema text" }"#).with_description("definition text"),
        ];
        let code = compile_default(&defs);
        assert!(code.contains(" * definition text\n"));
        assert!(!code.contains("schema text"));
    }

    #[test]
    fn test_deprecation_and_example_tags() {
        let code = compile_default(&[def(
            "Old",
            r#"{ "type": "object", "deprecated": true, "x-deprecatedMessage": "Use New", "example": { "a": 1 } }"#,
        )]);
        assert!(
            code.starts_with("/**\n * @deprecated Use New\n * @example {\"a\":1}\n */\n"),
            "{code}"
        );
    }

    #[test]
    fn test_ordering_and_determinism() {
        let defs = vec![
            def("b", "{}"),
            def("Zeta", "{}"),
            def("Alpha", "{}"),
            def("alpha", "{}"),
        ];
        let first = compile_default(&defs);
        let second = compile_default(&defs);
        assert_eq!(first, second);

        let positions: Vec<_> = ["Alpha", "Zeta", "alpha", "b"]
            .iter()
            .map(|name| first.find(&format!("export type {name} =")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{first}");
    }

    #[test]
    fn test_duplicate_names_keep_input_order() {
        let defs = vec![
            def("Same", "{}").with_description("first"),
            def("Same", "{}").with_description("second"),
        ];
        let code = compile_default(&defs);
        let first = code.find("first").unwrap();
        let second = code.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_extra_enum_names_keep_the_batch() {
        let defs = vec![
            def(
                "Pet",
                r#"{ "type": "object", "properties": { "name": { "type": "string" } } }"#,
            ),
            def(
                "Prio",
                r#"{ "enum": [0, 1], "x-enumNames": ["Low", "High", "Extra"] }"#,
            ),
        ];
        let code = compile_default(&defs);
        assert!(code.contains("export interface Pet {"), "{code}");
        assert!(
            code.ends_with("export enum Prio {\n  Low = 0,\n  High = 1,\n}\n"),
            "{code}"
        );
        assert!(!code.contains("Extra"), "{code}");
    }

    #[test]
    fn test_repeated_enum_values_stay_valid() {
        let code = compile_default(&[def("Code", r#"{ "enum": [1, "1"] }"#)]);
        assert_eq!(code, "export enum Code {\n  \"1\" = 1,\n  \"1_2\" = \"1\",\n}\n");
    }

    #[test]
    fn test_unicode_and_colliding_names() {
        let code = compile_default(&[def("Straße", "{}")]);
        assert_eq!(code, "export type Straße = any;\n");

        // Both are kept; the collision is only logged
        let code = compile_default(&[def("Foo.Bar", "{}"), def("FooBar", "{}")]);
        assert_eq!(code.matches("export type FooBar = any;").count(), 2, "{code}");
    }

    fn batch_with_one_failure() -> Vec<TypeDefinition> {
        let mut defs: Vec<_> = (0..9)
            .map(|i| def(&format!("Good{i}"), r#"{ "type": "object" }"#))
            .collect();
        defs.insert(
            4,
            def("Broken", r#"{ "enum": ["A", "B"], "x-enumNames": ["OnlyOne"] }"#),
        );
        defs
    }

    #[test]
    fn test_failure_discards_whole_batch() {
        let defs = batch_with_one_failure();
        assert_eq!(defs.len(), 10);
        assert_eq!(compile_default(&defs), "");

        let err = try_compile(&defs, &CompilerOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Broken"), "{err}");
    }

    #[test]
    fn test_isolate_policy_keeps_other_definitions() {
        let options = CompilerOptions {
            failure_policy: FailurePolicy::Isolate,
            ..CompilerOptions::default()
        };
        let code = compile(&batch_with_one_failure(), &options);

        assert_eq!(code.matches("export type Good").count(), 9, "{code}");
        assert!(code.contains(
            "/**\n * Type generation failed: x-enumNames has 1 entries but enum has 2 values\n */\nexport type Broken = any;\n"
        ));
    }

    #[test]
    fn test_object_enum_value_fails_batch() {
        let defs = vec![
            def("Fine", "{}"),
            def("Weird", r#"{ "enum": [{ "a": 1 }] }"#),
        ];
        assert_eq!(compile_default(&defs), "");
    }
}
