//! TypeScript code emission via the Emit trait.
//!
//! Each IR node implements `Emit` and renders itself on a single line.
//! Declarations additionally render object bodies as indented blocks with
//! per-property documentation.

use super::names::{escape_js_string, quote_if_needed};
use super::types::{
    TsEnumMember, TsLiteral, TsObject, TsPrimitive, TsProp, TsType, TsTypeDef, TypeDefKind,
};

const INDENT: &str = "  ";

/// Trait for emitting TypeScript code from IR nodes.
pub trait Emit {
    /// Convert the node to its TypeScript string representation.
    fn emit(&self) -> String;
}

impl Emit for TsPrimitive {
    fn emit(&self) -> String {
        match self {
            TsPrimitive::String => "string",
            TsPrimitive::Number => "number",
            TsPrimitive::Boolean => "boolean",
            TsPrimitive::Null => "null",
            TsPrimitive::Any => "any",
            TsPrimitive::Unknown => "unknown",
        }
        .to_string()
    }
}

impl Emit for TsLiteral {
    fn emit(&self) -> String {
        match self {
            TsLiteral::String(s) => format!("\"{}\"", escape_js_string(s)),
            TsLiteral::Number(n) => n.to_string(),
            TsLiteral::Bool(b) => b.to_string(),
            TsLiteral::Null => "null".to_string(),
        }
    }
}

impl Emit for TsType {
    fn emit(&self) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array(inner) => {
                let inner_str = inner.emit();
                // Wrap complex types in parentheses
                if inner.is_compound() {
                    format!("({inner_str})[]")
                } else {
                    format!("{inner_str}[]")
                }
            }
            TsType::Union(types) => types.iter().map(Emit::emit).collect::<Vec<_>>().join(" | "),
            TsType::Intersection(types) => types
                .iter()
                .map(|t| {
                    let s = t.emit();
                    if matches!(t, TsType::Union(_)) {
                        format!("({s})")
                    } else {
                        s
                    }
                })
                .collect::<Vec<_>>()
                .join(" & "),
            TsType::Object(object) => object.emit(),
            TsType::Literal(lit) => lit.emit(),
            TsType::Ref(name) => name.clone(),
        }
    }
}

impl Emit for TsProp {
    fn emit(&self) -> String {
        let key = quote_if_needed(&self.name);
        let opt = if self.optional { "?" } else { "" };
        format!("{key}{opt}: {}", self.ty.emit())
    }
}

impl Emit for TsObject {
    fn emit(&self) -> String {
        let mut parts: Vec<_> = self.props.iter().map(Emit::emit).collect();
        if let Some(index) = &self.index {
            parts.push(format!("[key: string]: {}", index.emit()));
        }
        if parts.is_empty() {
            "{}".to_string()
        } else {
            format!("{{ {} }}", parts.join("; "))
        }
    }
}

impl TsObject {
    /// Render as a multi-line body with documented properties.
    pub fn emit_block(&self) -> String {
        if self.props.is_empty() && self.index.is_none() {
            return "{}".to_string();
        }

        let mut output = "{\n".to_string();
        for prop in &self.props {
            output.push_str(&prop.doc.render(INDENT));
            output.push_str(&format!("{INDENT}{};\n", prop.emit()));
        }
        if let Some(index) = &self.index {
            output.push_str(&format!("{INDENT}[key: string]: {};\n", index.emit()));
        }
        output.push('}');
        output
    }
}

impl Emit for TsEnumMember {
    fn emit(&self) -> String {
        format!("{} = {}", self.name, self.value.emit())
    }
}

impl Emit for TsTypeDef {
    fn emit(&self) -> String {
        let declaration = match &self.kind {
            TypeDefKind::Interface(object) => {
                format!("export interface {} {}", self.name, object.emit_block())
            }
            TypeDefKind::TypeAlias(TsType::Object(object)) => {
                format!("export type {} = {};", self.name, object.emit_block())
            }
            TypeDefKind::TypeAlias(ty) => format!("export type {} = {};", self.name, ty.emit()),
            TypeDefKind::Enum(members) => {
                let mut output = format!("export enum {} {{\n", self.name);
                for member in members {
                    output.push_str(&format!("{INDENT}{},\n", member.emit()));
                }
                output.push('}');
                output
            }
        };
        format!("{}{declaration}\n", self.doc.render(""))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::super::doc::DocBlock;
    use super::*;

    fn prop(name: &str, ty: TsType, optional: bool) -> TsProp {
        TsProp {
            name: name.to_string(),
            ty,
            optional,
            doc: DocBlock::default(),
        }
    }

    #[test]
    fn test_array_of_union_is_parenthesized() {
        let ty = TsType::Array(Box::new(TsType::Union(vec![
            TsType::Primitive(TsPrimitive::String),
            TsType::Primitive(TsPrimitive::Null),
        ])));
        assert_eq!(ty.emit(), "(string | null)[]");
    }

    #[test]
    fn test_intersection_wraps_unions() {
        let ty = TsType::Intersection(vec![
            TsType::Ref("Base".into()),
            TsType::Union(vec![TsType::Ref("A".into()), TsType::Ref("B".into())]),
        ]);
        assert_eq!(ty.emit(), "Base & (A | B)");
    }

    #[test]
    fn test_inline_object() {
        let object = TsObject {
            props: vec![
                prop("id", TsType::Primitive(TsPrimitive::Number), false),
                prop("display-name", TsType::Primitive(TsPrimitive::String), true),
            ],
            index: Some(Box::new(TsType::Primitive(TsPrimitive::Any))),
        };
        assert_eq!(
            object.emit(),
            "{ id: number; \"display-name\"?: string; [key: string]: any }"
        );
        assert_eq!(TsObject::default().emit(), "{}");
    }

    #[test]
    fn test_string_literal_is_escaped() {
        assert_eq!(TsLiteral::String("say \"hi\"".into()).emit(), "\"say \\\"hi\\\"\"");
        let n = serde_json::Number::from_f64(1.5).unwrap();
        assert_eq!(TsLiteral::Number(n).emit(), "1.5");
        assert_eq!(TsLiteral::Number(u64::MAX.into()).emit(), "18446744073709551615");
    }

    #[test]
    fn test_interface_block_with_docs() {
        let mut name = prop("name", TsType::Primitive(TsPrimitive::String), false);
        name.doc = DocBlock::new(Some("The pet's name"));

        let def = TsTypeDef {
            name: "Pet".into(),
            doc: DocBlock::new(Some("A pet")),
            kind: TypeDefKind::Interface(TsObject {
                props: vec![name],
                index: None,
            }),
        };

        assert_eq!(
            def.emit(),
            "/**\n * A pet\n */\nexport interface Pet {\n  /**\n   * The pet's name\n   */\n  name: string;\n}\n"
        );
    }

    #[test]
    fn test_enum_declaration() {
        let def = TsTypeDef {
            name: "Status".into(),
            doc: DocBlock::default(),
            kind: TypeDefKind::Enum(vec![
                TsEnumMember {
                    name: "OPEN".into(),
                    value: TsLiteral::String("OPEN".into()),
                },
                TsEnumMember {
                    name: "\"1\"".into(),
                    value: TsLiteral::Number(1.into()),
                },
            ]),
        };
        assert_eq!(
            def.emit(),
            "export enum Status {\n  OPEN = \"OPEN\",\n  \"1\" = 1,\n}\n"
        );
    }
}
