use rusqlite::{Connection, OptionalExtension};

use crate::projects::{GlobalDocument, Project, ProjectDocument};

/// retrieves every project, ordered by id
pub fn get_all_projects(con: &Connection) -> Result<Vec<Project>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/projects/get_all.sql"))?;
    let rows = pst.query_map([], project_mapper)?;
    rows.collect::<Result<Vec<Project>, rusqlite::Error>>()
}

pub fn create_project(
    name: &str,
    description: Option<&str>,
    con: &Connection,
) -> Result<Project, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/projects/create_project.sql"
    ))?;
    pst.query_row(rusqlite::params![name, description], project_mapper)
}

/// replaces the name and description of the project.
///
/// if `None` is returned, no project has that id
pub fn update_project(
    id: u32,
    name: &str,
    description: Option<&str>,
    con: &Connection,
) -> Result<Option<Project>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/projects/update_project.sql"
    ))?;
    pst.query_row(rusqlite::params![id, name, description], project_mapper)
        .optional()
}

/// retrieves the documents of every project, ordered by id
pub fn get_all_project_documents(
    con: &Connection,
) -> Result<Vec<ProjectDocument>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/projects/get_documents.sql"
    ))?;
    let rows = pst.query_map([], project_document_mapper)?;
    rows.collect::<Result<Vec<ProjectDocument>, rusqlite::Error>>()
}

pub fn get_documents_for_project(
    project_name: &str,
    con: &Connection,
) -> Result<Vec<ProjectDocument>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/projects/get_documents_for_project.sql"
    ))?;
    let rows = pst.query_map(rusqlite::params![project_name], project_document_mapper)?;
    rows.collect::<Result<Vec<ProjectDocument>, rusqlite::Error>>()
}

pub fn create_project_document(
    project_name: &str,
    document_id: &str,
    document_description: Option<&str>,
    con: &Connection,
) -> Result<ProjectDocument, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/projects/create_document.sql"
    ))?;
    pst.query_row(
        rusqlite::params![project_name, document_id, document_description],
        project_document_mapper,
    )
}

pub fn get_all_global_documents(con: &Connection) -> Result<Vec<GlobalDocument>, rusqlite::Error> {
    let mut pst = con.prepare(include_str!("../assets/queries/documents/get_all.sql"))?;
    let rows = pst.query_map([], global_document_mapper)?;
    rows.collect::<Result<Vec<GlobalDocument>, rusqlite::Error>>()
}

pub fn create_global_document(
    title: &str,
    document_id: &str,
    document_description: Option<&str>,
    con: &Connection,
) -> Result<GlobalDocument, rusqlite::Error> {
    let mut pst = con.prepare(include_str!(
        "../assets/queries/documents/create_document.sql"
    ))?;
    pst.query_row(
        rusqlite::params![title, document_id, document_description],
        global_document_mapper,
    )
}

fn project_mapper(row: &rusqlite::Row) -> Result<Project, rusqlite::Error> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

fn project_document_mapper(row: &rusqlite::Row) -> Result<ProjectDocument, rusqlite::Error> {
    Ok(ProjectDocument {
        id: row.get(0)?,
        project_name: row.get(1)?,
        document_id: row.get(2)?,
        document_description: row.get(3)?,
    })
}

fn global_document_mapper(row: &rusqlite::Row) -> Result<GlobalDocument, rusqlite::Error> {
    Ok(GlobalDocument {
        id: row.get(0)?,
        title: row.get(1)?,
        document_id: row.get(2)?,
        document_description: row.get(3)?,
        created_at: row.get(4)?,
    })
}
