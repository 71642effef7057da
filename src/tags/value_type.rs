use std::fmt;
use std::str::FromStr;

use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};

/// how the raw value of a tag is interpreted. Tags without a definition are treated as [`ValueType::Text`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    #[default]
    Text,
    /// an ISO calendar date
    Date,
    /// markup produced by a document editor
    RichText,
    /// a json array of rows, each row mapping a declared column to a cell
    Table,
}

/// returned when the `type` column of a definition holds something we don't know about
#[derive(Debug, PartialEq)]
pub struct UnknownValueType(pub String);

impl ValueType {
    /// the value stored in the `type` column of the database
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Text => "text",
            ValueType::Date => "date",
            ValueType::RichText => "rich_text",
            ValueType::Table => "table",
        }
    }
}

impl FromStr for ValueType {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ValueType::Text),
            "date" => Ok(ValueType::Date),
            "rich_text" => Ok(ValueType::RichText),
            "table" => Ok(ValueType::Table),
            _ => Err(UnknownValueType(s.to_string())),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for ValueType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}
