//! Generic row view for `SELECT *` output.

use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};
use std::fmt::{self, Write as _};

use super::StoreError;

/// One cell of a dumped row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpValue {
    Null,
    Integer(i64),
    Text(String),
}

impl DumpValue {
    /// Text form of the cell; `None` for SQL NULL.
    pub fn as_text(&self) -> Option<String> {
        match self {
            DumpValue::Null => None,
            DumpValue::Integer(n) => Some(n.to_string()),
            DumpValue::Text(s) => Some(s.clone()),
        }
    }
}

impl fmt::Display for DumpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DumpValue::Null => write!(f, "NULL"),
            DumpValue::Integer(n) => write!(f, "{n}"),
            DumpValue::Text(s) => write_quoted(f, s),
        }
    }
}

/// Quotes text the way a Python tuple repr does: single quotes unless the
/// text holds a `'` and no `"`.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

/// A row as ordered `(column, value)` pairs, in table column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpRow {
    pub columns: Vec<(String, DumpValue)>,
}

impl DumpRow {
    pub(crate) fn try_from_row(row: &SqliteRow) -> Result<Self, StoreError> {
        let mut columns = Vec::with_capacity(row.columns().len());
        for col in row.columns() {
            let idx = col.ordinal();
            let value = {
                let raw = row.try_get_raw(idx)?;
                if raw.is_null() {
                    None
                } else {
                    Some(raw.type_info().name() == "INTEGER")
                }
            };
            let value = match value {
                None => DumpValue::Null,
                Some(true) => DumpValue::Integer(row.try_get::<i64, _>(idx)?),
                Some(false) => DumpValue::Text(row.try_get::<String, _>(idx)?),
            };
            columns.push((col.name().to_string(), value));
        }
        Ok(DumpRow { columns })
    }

    /// Value of a column by name.
    pub fn get(&self, name: &str) -> Option<&DumpValue> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, v)| v)
    }
}

impl fmt::Display for DumpRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, (_, value)) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_as_tuple() {
        let row = DumpRow {
            columns: vec![
                ("id".to_string(), DumpValue::Integer(1)),
                ("name".to_string(), DumpValue::Text("Luke Skywalker".to_string())),
                ("films".to_string(), DumpValue::Null),
            ],
        };
        assert_eq!(row.to_string(), "(1, 'Luke Skywalker', NULL)");
        assert_eq!(row.get("id"), Some(&DumpValue::Integer(1)));
        assert!(row.get("mass").is_none());
    }

    #[test]
    fn display_escapes_quotes() {
        let v = DumpValue::Text("Jar Jar's".to_string());
        assert_eq!(v.to_string(), r#""Jar Jar's""#);
        assert_eq!(v.as_text().as_deref(), Some("Jar Jar's"));
        assert_eq!(DumpValue::Null.as_text(), None);
    }

    #[test]
    fn display_picks_quote_and_escapes_controls() {
        let both = DumpValue::Text(r#"it's "Ben""#.to_string());
        assert_eq!(both.to_string(), r#"'it\'s "Ben"'"#);
        let double = DumpValue::Text(r#"say "hi""#.to_string());
        assert_eq!(double.to_string(), r#"'say "hi"'"#);
        let ctl = DumpValue::Text("a\\b\nc\td".to_string());
        assert_eq!(ctl.to_string(), r"'a\\b\nc\td'");
    }
}
