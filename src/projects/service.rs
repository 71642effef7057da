use crate::model::error::project_errors::{CreateProjectError, GetProjectError, UpdateProjectError};
use crate::projects::repository;
use crate::projects::{
    CreateGlobalDocumentRequest, CreateProjectDocumentRequest, CreateProjectRequest,
    GlobalDocument, Project, ProjectDocument, UpdateProjectRequest,
};
use crate::repository::SqliteStore;

pub fn list_projects(store: &SqliteStore) -> Result<Vec<Project>, GetProjectError> {
    store
        .with_connection("retrieve projects", repository::get_all_projects)
        .map_err(|_| GetProjectError::DbError)
}

pub fn create_project(
    store: &SqliteStore,
    request: CreateProjectRequest,
) -> Result<Project, CreateProjectError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(CreateProjectError::BlankName);
    }
    let project = store
        .with_connection(&format!("create project {name}"), |con| {
            repository::create_project(name, request.description.as_deref(), con)
        })
        .map_err(|_| CreateProjectError::DbError)?;
    log::info!("Created project {} ({})", project.name, project.id);
    Ok(project)
}

/// renames the project and replaces its description. `updatedAt` is refreshed
pub fn update_project(
    store: &SqliteStore,
    request: UpdateProjectRequest,
) -> Result<Project, UpdateProjectError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(UpdateProjectError::BlankName);
    }
    let updated = store
        .with_connection(&format!("update project {}", request.id), |con| {
            repository::update_project(request.id, name, request.description.as_deref(), con)
        })
        .map_err(|_| UpdateProjectError::DbError)?;
    match updated {
        Some(project) => Ok(project),
        None => {
            log::warn!("Could not update project {}, because it does not exist", request.id);
            Err(UpdateProjectError::NotFound)
        }
    }
}

/// every project document, or only those of `project_name` if passed
pub fn list_project_documents(
    store: &SqliteStore,
    project_name: Option<&str>,
) -> Result<Vec<ProjectDocument>, GetProjectError> {
    let result = match project_name {
        Some(project_name) => store.with_connection(
            &format!("retrieve the documents of project {project_name}"),
            |con| repository::get_documents_for_project(project_name, con),
        ),
        None => store.with_connection(
            "retrieve project documents",
            repository::get_all_project_documents,
        ),
    };
    result.map_err(|_| GetProjectError::DbError)
}

pub fn create_project_document(
    store: &SqliteStore,
    request: CreateProjectDocumentRequest,
) -> Result<ProjectDocument, CreateProjectError> {
    let project_name = request.project_name.trim();
    let document_id = request.document_id.trim();
    if project_name.is_empty() || document_id.is_empty() {
        return Err(CreateProjectError::BlankName);
    }
    store
        .with_connection(
            &format!("attach document {document_id} to project {project_name}"),
            |con| {
                repository::create_project_document(
                    project_name,
                    document_id,
                    request.document_description.as_deref(),
                    con,
                )
            },
        )
        .map_err(|_| CreateProjectError::DbError)
}

pub fn list_global_documents(store: &SqliteStore) -> Result<Vec<GlobalDocument>, GetProjectError> {
    store
        .with_connection(
            "retrieve global documents",
            repository::get_all_global_documents,
        )
        .map_err(|_| GetProjectError::DbError)
}

/// creates a global document. A missing or blank title falls back to the document id
pub fn create_global_document(
    store: &SqliteStore,
    request: CreateGlobalDocumentRequest,
) -> Result<GlobalDocument, CreateProjectError> {
    let document_id = request.document_id.trim();
    if document_id.is_empty() {
        return Err(CreateProjectError::BlankName);
    }
    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|it| !it.is_empty())
        .unwrap_or(document_id);
    store
        .with_connection(&format!("create global document {document_id}"), |con| {
            repository::create_global_document(
                title,
                document_id,
                request.document_description.as_deref(),
                con,
            )
        })
        .map_err(|_| CreateProjectError::DbError)
}
