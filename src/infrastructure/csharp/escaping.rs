//! Context-aware escaping for C# output
//!
//! Identifiers that collide with keywords get the verbatim `@` prefix, and
//! free text placed in `//` comments is kept on one line so it can never
//! swallow the code that follows it.

use std::borrow::Cow;

/// Reserved keywords: never usable as bare identifiers
pub const RESERVED: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Contextual keywords: legal identifiers in most positions, but escaped
/// anyway so a type name never changes meaning depending on where it lands
pub const CONTEXTUAL: &[&str] = &[
    "add", "alias", "allows", "and", "args", "ascending", "async", "await", "by", "descending",
    "dynamic", "equals", "extension", "field", "file", "from", "get", "global", "group", "init",
    "into", "join", "let", "managed", "nameof", "nint", "not", "notnull", "nuint", "on", "or",
    "orderby", "partial", "record", "remove", "required", "scoped", "select", "set",
    "unmanaged", "value", "var", "when", "where", "with", "yield",
];

/// True for reserved and contextual keywords
pub fn is_keyword(s: &str) -> bool {
    RESERVED.contains(&s) || CONTEXTUAL.contains(&s)
}

/// Escape an identifier for use anywhere in C# source
pub fn escape_identifier(s: &str) -> Cow<'_, str> {
    if is_keyword(s) {
        Cow::Owned(format!("@{}", s))
    } else {
        Cow::Borrowed(s)
    }
}

/// Escape a dotted name (`System.Threading.Tasks`) segment by segment
pub fn escape_qualified(s: &str) -> String {
    s.split('.')
        .map(escape_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// Make free text safe for a single-line `//` comment
///
/// Line breaks (including the Unicode separators C# treats as new lines)
/// become spaces.
pub fn escape_line_comment(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\r' | '\n' | '\u{0085}' | '\u{2028}' | '\u{2029}' => ' ',
            other => other,
        })
        .collect()
}
