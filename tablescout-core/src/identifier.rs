//! Identifier sanitization, the allow-list gate in front of every SQL
//! interpolation and report file name.
//!
//! The warehouse driver cannot parameterize identifiers the way it can
//! literal values, so schema, table, and column names must pass this check
//! before they are spliced into SQL text or used as a path fragment.

use std::fmt;

use crate::error::{Result, TableScoutError};

/// What a name is used as, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Schema,
    Table,
    Column,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Schema => "Schema",
            Self::Table => "Table",
            Self::Column => "Column",
        };
        f.write_str(label)
    }
}

/// Validates a schema, table, or column name against the allow-list.
///
/// Accepts exactly `[A-Za-z_][A-Za-z0-9_-]*` and returns the input
/// unchanged; this is a whitelist gate, not an encoder. Anything else is an
/// error: empty names, leading digits or hyphens, whitespace, quotes,
/// semicolons, path separators.
///
/// A bare `--` inside an identifier is permitted: the SQL line-comment token
/// only acts as a comment when followed by a space, so it is inert in this
/// quoting context. Callers must not rely on that if the surrounding quoting
/// ever changes.
pub fn sanitize_identifier<'a>(name: &'a str, kind: IdentifierKind) -> Result<&'a str> {
    let Some(first) = name.chars().next() else {
        return Err(TableScoutError::identifier(kind, "name cannot be empty"));
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(TableScoutError::identifier(
            kind,
            format!("'{name}' must start with a letter or underscore"),
        ));
    }

    for ch in name.chars() {
        if !ch.is_ascii_alphanumeric() && ch != '_' && ch != '-' {
            return Err(TableScoutError::identifier(
                kind,
                format!("'{name}' contains invalid character '{ch}'"),
            ));
        }
    }

    Ok(name)
}

/// Wraps an identifier in double quotes for interpolation into SQL text.
///
/// Internal double quotes are doubled, although a sanitized identifier can
/// never contain one.
pub fn quote_identifier(identifier: &str) -> String {
    let escaped = identifier.replace('"', "\"\"");
    format!("\"{escaped}\"")
}
