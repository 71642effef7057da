use chrono::{DateTime, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use rocket::serde::json::serde_json::{self, Value};

use crate::model::error::edit_errors::MalformedValue;
use crate::tags::ValueType;

/// the date format the calendar picker produces and that date tags store
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// one row of a table tag, column name to cell text. Keeps the order the columns were written in
pub type TableRow = IndexMap<String, String>;

/// A raw tag value paired with the type its definition declares.
///
/// Conversion from the stored string happens once at the store boundary, everything after that matches on this
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Text(String),
    /// kept as the raw string, since a stored date might not parse
    Date(String),
    /// markup
    RichText(String),
    Table(Vec<TableRow>),
}

impl TypedValue {
    /// the draft a fresh editor starts with
    pub fn empty(value_type: ValueType) -> TypedValue {
        match value_type {
            ValueType::Text => TypedValue::Text(String::new()),
            ValueType::Date => TypedValue::Date(String::new()),
            ValueType::RichText => TypedValue::RichText(String::new()),
            ValueType::Table => TypedValue::Table(Vec::new()),
        }
    }

    /// Interprets a stored value for display. This never fails: a table payload that can't be read
    /// is logged and treated as having no rows, everything else is kept as-is
    pub fn from_raw(value_type: ValueType, raw: &str) -> TypedValue {
        match value_type {
            ValueType::Text => TypedValue::Text(raw.to_string()),
            ValueType::Date => TypedValue::Date(raw.to_string()),
            ValueType::RichText => TypedValue::RichText(raw.to_string()),
            ValueType::Table => match parse_table(raw) {
                Ok(rows) => TypedValue::Table(rows),
                Err(e) => {
                    log::warn!("Ignoring table value that could not be read: {e:?}");
                    TypedValue::Table(Vec::new())
                }
            },
        }
    }

    /// a cleared value: an empty string, or a table without any rows
    pub fn is_empty(&self) -> bool {
        match self {
            TypedValue::Text(s) | TypedValue::Date(s) | TypedValue::RichText(s) => s.is_empty(),
            TypedValue::Table(rows) => rows.is_empty(),
        }
    }

    /// checks that the value can be stored under its type.
    /// Dates must be ISO dates, and table rows may only use `columns` (any column is fine if none are declared)
    pub fn validate(&self, columns: &[String]) -> Result<(), MalformedValue> {
        match self {
            TypedValue::Date(raw) if !raw.is_empty() => {
                match NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT) {
                    Ok(_) => Ok(()),
                    Err(_) => Err(MalformedValue::InvalidDate(raw.clone())),
                }
            }
            TypedValue::Table(rows) if !columns.is_empty() => {
                match rows
                    .iter()
                    .flat_map(|row| row.keys())
                    .find(|key| !columns.contains(*key))
                {
                    Some(unknown) => Err(MalformedValue::UnknownColumn(unknown.clone())),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    /// the string written to the store. Tables become a json array of row objects, everything else is stored as-is
    pub fn serialize(&self) -> String {
        match self {
            TypedValue::Text(s) | TypedValue::Date(s) | TypedValue::RichText(s) => s.clone(),
            TypedValue::Table(rows) => serialize_table(rows),
        }
    }
}

/// one row as it arrives over the wire, before its cells are turned into text
pub type RawTableRow = IndexMap<String, Value>;

/// Parses a table payload. Cells go through [`rows_from_cells`]
pub fn parse_table(raw: &str) -> Result<Vec<TableRow>, MalformedValue> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let rows: Vec<RawTableRow> = serde_json::from_str(raw)
        .map_err(|e| MalformedValue::InvalidTable(e.to_string()))?;
    rows_from_cells(rows)
}

/// Turns json cells into text. Cells are expected to be strings, but numbers and booleans are
/// turned into their text and `null` into an empty cell. Nested arrays and objects are rejected
pub fn rows_from_cells(rows: Vec<RawTableRow>) -> Result<Vec<TableRow>, MalformedValue> {
    let mut parsed = Vec::with_capacity(rows.len());
    for row in rows {
        let mut cells = TableRow::with_capacity(row.len());
        for (column, cell) in row {
            let text = match cell {
                Value::String(s) => s,
                Value::Null => String::new(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(MalformedValue::InvalidTable(format!(
                        "cell {column} is not text"
                    )))
                }
            };
            cells.insert(column, text);
        }
        parsed.push(cells);
    }
    Ok(parsed)
}

fn serialize_table(rows: &[TableRow]) -> String {
    match serde_json::to_string(rows) {
        Ok(json) => json,
        Err(e) => {
            // string maps always serialize, but don't take the value down if that ever changes
            log::error!("Failed to serialize table rows: {e:?}");
            String::from("[]")
        }
    }
}

/// Reads a calendar date out of a stored value. Plain ISO dates are expected,
/// but full ISO date-times (with or without an offset) are accepted too and only their date is kept
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|it| it.date())
}
