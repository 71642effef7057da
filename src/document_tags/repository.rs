use rusqlite::Connection;

use crate::document_tags::DocumentTagLink;

pub fn get_links_for_document(
    document_name: &str,
    con: &Connection,
) -> Result<Vec<DocumentTagLink>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/document_tags/get_for_document.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![document_name], link_mapper)?;
    rows.collect::<Result<Vec<DocumentTagLink>, rusqlite::Error>>()
}

pub fn get_links_for_tag(
    tag_name: &str,
    con: &Connection,
) -> Result<Vec<DocumentTagLink>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/document_tags/get_for_tag.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![tag_name], link_mapper)?;
    rows.collect::<Result<Vec<DocumentTagLink>, rusqlite::Error>>()
}

/// this does not check whether the link already exists, duplicate links are collapsed when they're read
pub fn create_link(
    document_name: Option<&str>,
    tag_name: &str,
    con: &Connection,
) -> Result<DocumentTagLink, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/document_tags/create_link.sql"
    ))?;
    pst.query_row(rusqlite::params![document_name, tag_name], link_mapper)
}

/// moves every link whose tag name starts with `prefix` (case-sensitive) to `document_name`
pub fn assign_by_prefix(
    document_name: &str,
    prefix: &str,
    con: &Connection,
) -> Result<Vec<DocumentTagLink>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/document_tags/assign_by_prefix.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![document_name, prefix], link_mapper)?;
    let mut links = rows.collect::<Result<Vec<DocumentTagLink>, rusqlite::Error>>()?;
    // returning doesn't guarantee any order
    links.sort_by_key(|it| it.id);
    Ok(links)
}

/// 1. id
/// 2. documentName
/// 3. tagName
/// 4. createdAt
fn link_mapper(row: &rusqlite::Row) -> Result<DocumentTagLink, rusqlite::Error> {
    Ok(DocumentTagLink {
        id: row.get(0)?,
        document_name: row.get(1)?,
        tag_name: row.get(2)?,
        created_at: row.get(3)?,
    })
}
