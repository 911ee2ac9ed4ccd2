//! Identifier helpers: type-name sanitization, `$ref` name extraction, key quoting.

use std::collections::HashSet;
use std::sync::LazyLock;

/// TypeScript reserved words that cannot be used as identifiers.
pub static TS_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        "let",
        "static",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "await",
        "async",
    ]
    .into_iter()
    .collect()
});

/// Built-in type names a declaration may not shadow.
static TS_PREDEFINED_TYPES: [&str; 10] = [
    "any", "boolean", "never", "number", "object", "string", "symbol", "bigint", "undefined",
    "unknown",
];

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Check if a name needs quoting to be used as a property or enum member key.
///
/// Returns true if the name is empty, doesn't start with a letter, underscore
/// or dollar sign, or contains any other character.
pub fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        || !name.chars().all(is_ident_char)
}

/// Escape a string for use in JavaScript/TypeScript string literals.
pub fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Quote a key if it is not a valid identifier.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        format!("\"{}\"", escape_js_string(name))
    } else {
        name.to_string()
    }
}

/// Map an arbitrary schema key to a valid TypeScript type name.
///
/// - Characters that cannot appear in identifiers split the name; every segment
///   after the first gets its first letter upper-cased (`Page«Item»` -> `PageItem`)
/// - A leading digit, a reserved word or a built-in type name gets a `_` prefix
/// - Empty input becomes `_empty`
pub fn sanitize_name(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    for (i, part) in raw.split(|c: char| !is_ident_char(c)).enumerate() {
        if part.is_empty() {
            continue;
        }
        if i == 0 || result.is_empty() {
            result.push_str(part);
        } else {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                result.extend(first.to_uppercase());
                result.extend(chars);
            }
        }
    }

    if result.is_empty() {
        return "_empty".to_string();
    }

    if result.starts_with(char::is_numeric)
        || TS_RESERVED_WORDS.contains(result.as_str())
        || TS_PREDEFINED_TYPES.contains(&result.as_str())
    {
        result.insert(0, '_');
    }

    result
}

/// Map a `$ref` pointer to the emitted name of its target.
///
/// Takes the last pointer segment, undoes JSON-pointer escaping and sanitizes
/// the result the same way declarations are, so references line up with names.
pub fn extract_reference_name(ref_path: &str) -> String {
    let last = ref_path.rsplit('/').next().unwrap_or(ref_path);
    sanitize_name(&last.replace("~1", "/").replace("~0", "~"))
}
