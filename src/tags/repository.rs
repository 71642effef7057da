use std::backtrace::Backtrace;

use rocket::serde::json::serde_json;
use rusqlite::{Connection, OptionalExtension};

use crate::tags::{TagDefinition, TagValue, ValueType};

/// retrieves every tag definition, ordered by id
pub fn get_all_definitions(con: &Connection) -> Result<Vec<TagDefinition>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/definitions/get_all.sql"))?;
    let rows = pst.query_map([], definition_mapper)?;
    rows.collect::<Result<Vec<TagDefinition>, rusqlite::Error>>()
}

/// searches for the definition with exactly the passed name.
///
/// if `None` is returned, that means the tag has never been declared
pub fn get_definition_by_name(
    name: &str,
    con: &Connection,
) -> Result<Option<TagDefinition>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/definitions/get_by_name.sql"
    ))?;
    pst.query_row(rusqlite::params![name], definition_mapper)
        .optional()
}

/// creates the definition, or replaces the type and columns of the definition that already has that name.
/// Validating the columns is up to the caller
pub fn save_definition(
    name: &str,
    value_type: ValueType,
    columns: &[String],
    con: &Connection,
) -> Result<TagDefinition, rusqlite::Error> {
    let serialized_columns = if columns.is_empty() {
        None
    } else {
        // a list of strings always serializes
        serde_json::to_string(columns).ok()
    };
    let mut pst = con.prepare(include_str!(
        "../assets/queries/definitions/save_definition.sql"
    ))?;
    pst.query_row(
        rusqlite::params![name, value_type, serialized_columns],
        definition_mapper,
    )
}

/// retrieves every tag value, ordered by id
pub fn get_all_values(con: &Connection) -> Result<Vec<TagValue>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/values/get_all.sql"))?;
    let rows = pst.query_map([], value_mapper)?;
    rows.collect::<Result<Vec<TagValue>, rusqlite::Error>>()
}

pub fn get_value_by_name(
    tag_name: &str,
    con: &Connection,
) -> Result<Option<TagValue>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/values/get_by_name.sql"))?;
    pst.query_row(rusqlite::params![tag_name], value_mapper)
        .optional()
}

/// inserts the value for `tag_name`, or overwrites it if a row already exists.
/// The unique constraint on `tagName` keeps this at one row per tag
pub fn upsert_value(
    tag_name: &str,
    raw_value: &str,
    con: &Connection,
) -> Result<TagValue, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/values/upsert_value.sql"))?;
    pst.query_row(rusqlite::params![tag_name, raw_value], value_mapper)
}

/// removes the value with the passed id.
///
/// # Returns
/// - `Ok(true)` if a row was deleted
/// - `Ok(false)` if no value with that id exists
pub fn delete_value(id: u32, con: &Connection) -> Result<bool, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/values/delete_value.sql"))?;
    let deleted = pst.execute(rusqlite::params![id])?;
    Ok(deleted > 0)
}

/// 1. id
/// 2. name
/// 3. type
/// 4. columns
fn definition_mapper(row: &rusqlite::Row) -> Result<TagDefinition, rusqlite::Error> {
    let id: u32 = row.get(0)?;
    let name: String = row.get(1)?;
    let raw_type: String = row.get(2)?;
    let raw_columns: Option<String> = row.get(3)?;
    let value_type = match raw_type.parse::<ValueType>() {
        Ok(t) => t,
        Err(_) => {
            log::warn!("Tag {name} has unknown type {raw_type}, treating it as text");
            ValueType::Text
        }
    };
    let columns = if value_type == ValueType::Table {
        parse_columns(&name, raw_columns)
    } else {
        Vec::new()
    };
    Ok(TagDefinition {
        id,
        name,
        value_type,
        columns,
    })
}

fn parse_columns(name: &str, raw_columns: Option<String>) -> Vec<String> {
    let Some(raw) = raw_columns.filter(|it| !it.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(columns) => columns,
        Err(e) => {
            log::error!(
                "Columns for tag {name} are not a json list of strings: {e:?}\n{}",
                Backtrace::force_capture()
            );
            Vec::new()
        }
    }
}

/// 1. id
/// 2. tagName
/// 3. value
/// 4. createdAt
/// 5. updatedAt
fn value_mapper(row: &rusqlite::Row) -> Result<TagValue, rusqlite::Error> {
    Ok(TagValue {
        id: row.get(0)?,
        tag_name: row.get(1)?,
        raw_value: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
