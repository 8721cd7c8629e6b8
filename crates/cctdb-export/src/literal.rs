//! SQL literal rendering.

use crate::error::LiteralError;

/// A value bound for one column of an `INSERT` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlValue<'a> {
    Null,
    Integer(i64),
    Text(&'a str),
}

impl<'a> SqlValue<'a> {
    /// Text when present, `NULL` otherwise.
    pub fn optional_text(value: Option<&'a str>) -> Self {
        value.map_or(SqlValue::Null, SqlValue::Text)
    }

    /// Renders the value as a SQL literal.
    pub fn to_literal(&self) -> Result<String, LiteralError> {
        match self {
            SqlValue::Null => Ok("NULL".to_string()),
            SqlValue::Integer(n) => Ok(n.to_string()),
            SqlValue::Text(s) => quote_text(s),
        }
    }
}

impl From<i64> for SqlValue<'_> {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<usize> for SqlValue<'_> {
    fn from(value: usize) -> Self {
        SqlValue::Integer(value as i64)
    }
}

impl<'a> From<&'a str> for SqlValue<'a> {
    fn from(value: &'a str) -> Self {
        SqlValue::Text(value)
    }
}

/// Quotes `value` as a single-quoted SQL string, doubling embedded quotes.
///
/// NUL cannot be represented inside a SQL text literal and is rejected.
pub fn quote_text(value: &str) -> Result<String, LiteralError> {
    if value.contains('\0') {
        return Err(LiteralError::NulCharacter);
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            quoted.push('\'');
        }
        quoted.push(ch);
    }
    quoted.push('\'');
    Ok(quoted)
}

/// Quotes an identifier with double quotes, doubling embedded double quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
