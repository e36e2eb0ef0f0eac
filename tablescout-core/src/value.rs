//! Cell values decoded from warehouse rows.
//!
//! The utilities print and report arbitrary columns, so cells are decoded
//! into a small dynamic value model by matching the Postgres type name of
//! each column.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{Row, TypeInfo, ValueRef};

/// A single result cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
}

impl Value {
    /// True for SQL NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Report formatting: `NULL` marker for nulls, strings wrapped in double
    /// quotes verbatim (no internal escaping), everything else its natural
    /// representation.
    pub fn format(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Text(s) => format!("\"{s}\""),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Date(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::TimestampTz(v) => write!(f, "{v}"),
        }
    }
}

/// Decodes one cell of a row by the column's Postgres type name.
///
/// Unknown types fall back to a string decode; a cell that cannot be read at
/// all renders as its type name in angle brackets rather than failing the
/// whole row.
pub(crate) fn decode_cell(row: &PgRow, idx: usize) -> Value {
    let Ok(raw) = row.try_get_raw(idx) else {
        return Value::Null;
    };
    if raw.is_null() {
        return Value::Null;
    }
    let type_name = raw.type_info().name().to_string();

    match type_name.as_str() {
        "BOOL" => row
            .try_get::<Option<bool>, _>(idx)
            .ok()
            .flatten()
            .map_or(Value::Null, Value::Bool),
        "INT2" => row
            .try_get::<Option<i16>, _>(idx)
            .ok()
            .flatten()
            .map_or(Value::Null, |v| Value::Int(i64::from(v))),
        "INT4" => row
            .try_get::<Option<i32>, _>(idx)
            .ok()
            .flatten()
            .map_or(Value::Null, |v| Value::Int(i64::from(v))),
        "INT8" => row
            .try_get::<Option<i64>, _>(idx)
            .ok()
            .flatten()
            .map_or(Value::Null, Value::Int),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(idx)
            .ok()
            .flatten()
            .map_or(Value::Null, |v| Value::Float(f64::from(v))),
        "FLOAT8" => row
            .try_get::<Option<f64>, _>(idx)
            .ok()
            .flatten()
            .map_or(Value::Null, Value::Float),
        "NUMERIC" => row
            .try_get::<Option<Decimal>, _>(idx)
            .ok()
            .flatten()
            .map_or(Value::Null, Value::Decimal),
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(idx)
            .ok()
            .flatten()
            .map_or(Value::Null, Value::Date),
        "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(idx)
            .ok()
            .flatten()
            .map_or(Value::Null, Value::Timestamp),
        "TIMESTAMPTZ" => row
            .try_get::<Option<DateTime<Utc>>, _>(idx)
            .ok()
            .flatten()
            .map_or(Value::Null, Value::TimestampTz),
        _ => row
            .try_get::<Option<String>, _>(idx)
            .ok()
            .flatten()
            .map_or_else(
                || Value::Text(format!("<{}>", type_name.to_lowercase())),
                Value::Text,
            ),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_null_formats_as_marker() {
        assert_eq!(Value::Null.format(), "NULL");
        assert_eq!(Value::Null.to_string(), "NULL");
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_text_is_quoted_without_escaping() {
        assert_eq!(Value::Text("hello".into()).format(), "\"hello\"");
        assert_eq!(Value::Text("test value".into()).format(), "\"test value\"");
        assert_eq!(Value::Text(String::new()).format(), "\"\"");
        assert_eq!(
            Value::Text("with 'quotes'".into()).format(),
            "\"with 'quotes'\""
        );
    }

    #[test]
    fn test_text_display_is_unquoted() {
        assert_eq!(Value::Text("hello".into()).to_string(), "hello");
    }

    #[test]
    fn test_integers_natural() {
        assert_eq!(Value::Int(0).format(), "0");
        assert_eq!(Value::Int(42).format(), "42");
        assert_eq!(Value::Int(-100).format(), "-100");
    }

    #[test]
    fn test_floats_natural() {
        assert_eq!(Value::Float(2.75).format(), "2.75");
        assert_eq!(Value::Float(-2.5).format(), "-2.5");
    }

    #[test]
    fn test_booleans_natural() {
        assert_eq!(Value::Bool(true).format(), "true");
        assert_eq!(Value::Bool(false).format(), "false");
    }

    #[test]
    fn test_decimal_natural() {
        let value = Value::Decimal(Decimal::from_str("123.45").unwrap());
        assert_eq!(value.format(), "123.45");
        let value = Value::Decimal(Decimal::from_str("-99.99").unwrap());
        assert_eq!(value.format(), "-99.99");
    }

    #[test]
    fn test_date_contains_year() {
        let value = Value::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(value.format().contains("2024"));
    }

    #[test]
    fn test_timestamp_contains_time() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let value = Value::Timestamp(date.and_hms_opt(10, 30, 45).unwrap());
        let formatted = value.format();
        assert!(formatted.contains("2024"));
        assert!(formatted.contains("10:30:45"));
    }
}
