//! TypeScript IR for type declarations.
//!
//! Schemas are first lowered into these nodes, then turned into text by the
//! [`Emit`](super::emit::Emit) implementations.

use super::doc::DocBlock;

/// TypeScript type representation
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// Primitive types: string, number, boolean, null, any, unknown
    Primitive(TsPrimitive),
    /// Array type: T[]
    Array(Box<TsType>),
    /// Union type: A | B | C
    Union(Vec<TsType>),
    /// Intersection type: A & B & C
    Intersection(Vec<TsType>),
    /// Object type: { foo: string; bar?: number }
    Object(TsObject),
    /// Literal type: "foo", 42, true
    Literal(TsLiteral),
    /// Named type reference
    Ref(String),
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `null`
    Null,
    /// `any`
    Any,
    /// `unknown`
    Unknown,
}

/// Object shape: named properties plus an optional string index signature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TsObject {
    /// Declared properties, in emission order.
    pub props: Vec<TsProp>,
    /// Value type of `[key: string]: T`, if extra keys are allowed.
    pub index: Option<Box<TsType>>,
}

/// Object property definition
#[derive(Debug, Clone, PartialEq)]
pub struct TsProp {
    /// Raw property key.
    pub name: String,
    /// Property type.
    pub ty: TsType,
    /// Emitted with `?`.
    pub optional: bool,
    /// Documentation attached to the property.
    pub doc: DocBlock,
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq)]
pub enum TsLiteral {
    /// `"foo"`
    String(String),
    /// `42`, `1.5`; kept as the source token so large integers survive
    Number(serde_json::Number),
    /// `true`
    Bool(bool),
    /// `null`
    Null,
}

/// One member of an `enum` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TsEnumMember {
    /// Member name, already quoted if it is not a valid identifier.
    pub name: String,
    /// Member initializer.
    pub value: TsLiteral,
}

/// Type definition kind
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefKind {
    /// `export interface Foo { ... }`
    Interface(TsObject),
    /// `export type Foo = ...;`
    TypeAlias(TsType),
    /// `export enum Foo { ... }`
    Enum(Vec<TsEnumMember>),
}

/// A named, documented declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TsTypeDef {
    /// Emitted (sanitized) name.
    pub name: String,
    /// Documentation block placed above the declaration.
    pub doc: DocBlock,
    /// What is declared.
    pub kind: TypeDefKind,
}

impl TsType {
    /// Whether the type needs parentheses when used as an array element.
    pub fn is_compound(&self) -> bool {
        matches!(self, TsType::Union(_) | TsType::Intersection(_))
    }

    /// Whether the type already admits `null`.
    pub fn admits_null(&self) -> bool {
        match self {
            TsType::Primitive(TsPrimitive::Null | TsPrimitive::Any | TsPrimitive::Unknown)
            | TsType::Literal(TsLiteral::Null) => true,
            TsType::Union(types) => types.iter().any(TsType::admits_null),
            _ => false,
        }
    }
}
