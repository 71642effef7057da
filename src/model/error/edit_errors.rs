use crate::model::error::store_errors::StoreError;
use crate::tags::ValueType;

/// a raw value that doesn't parse under the value type of its tag
#[derive(PartialEq, Debug, Clone)]
pub enum MalformedValue {
    /// date tags only accept ISO `YYYY-MM-DD` strings
    InvalidDate(String),
    /// the payload is not a json array of objects
    InvalidTable(String),
    /// a table row used a column the tag doesn't declare
    UnknownColumn(String),
}

#[derive(PartialEq, Debug)]
pub enum EditError {
    /// the draft would store a value that can't be read back under the tag's type
    Malformed(MalformedValue),
    /// the edit doesn't fit the editor for this tag, e.g. rows submitted for a text tag
    WrongEditor(ValueType),
    /// the backing store failed, nothing was written
    Store(StoreError),
}

impl From<StoreError> for EditError {
    fn from(value: StoreError) -> Self {
        EditError::Store(value)
    }
}

impl From<MalformedValue> for EditError {
    fn from(value: MalformedValue) -> Self {
        EditError::Malformed(value)
    }
}
