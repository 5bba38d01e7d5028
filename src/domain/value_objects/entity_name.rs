//! EntityName value object - the domain concept driving generation

use std::fmt;

use crate::error::{GenError, GenResult};

/// A validated domain entity name (e.g. `Product`)
///
/// Entity names are spliced into generated identifiers such as
/// `Create{Entity}Command`, so they must follow identifier rules on their own:
/// an `XID_Start` character or `_` first, then `XID_Continue` characters.
/// Letter-like symbols such as `²` or `½` are not identifier characters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityName(String);

impl EntityName {
    /// Validate and wrap a raw catalog entry
    pub fn parse(raw: &str) -> GenResult<Self> {
        let mut chars = raw.chars();
        let Some(first) = chars.next() else {
            return Err(GenError::invalid_name(raw, "entity name is empty"));
        };

        if !is_identifier_start(first) {
            return Err(GenError::invalid_name(
                raw,
                format!("must start with a letter or '_', found '{}'", first.escape_debug()),
            ));
        }

        if let Some(bad) = chars.find(|c| !is_identifier_part(*c)) {
            return Err(GenError::invalid_name(
                raw,
                format!("character '{}' cannot appear in an identifier", bad.escape_debug()),
            ));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub(crate) fn is_identifier_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

pub(crate) fn is_identifier_part(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// True when `s` is a plain (non-verbatim) identifier
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if is_identifier_start(c)) && chars.all(is_identifier_part)
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
