//! Knobs that change how definitions are compiled.

use serde::Deserialize;

/// Default limit for inline schema nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Keyword used wherever a schema gives no usable shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownType {
    /// `any`
    #[default]
    Any,
    /// `unknown`
    Unknown,
}

impl UnknownType {
    /// The TypeScript keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            UnknownType::Any => "any",
            UnknownType::Unknown => "unknown",
        }
    }
}

/// What happens when one definition fails to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Any failure discards the whole batch and yields an empty string.
    #[default]
    AllOrNothing,
    /// A failing definition becomes a documented fallback alias; the rest are kept.
    Isolate,
}

/// Options for [`crate::compile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilerOptions {
    /// Fallback keyword.
    pub unknown_type: UnknownType,
    /// Batch failure behavior.
    pub failure_policy: FailurePolicy,
    /// Maximum nesting of inline schemas.
    pub max_depth: usize,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            unknown_type: UnknownType::default(),
            failure_policy: FailurePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
