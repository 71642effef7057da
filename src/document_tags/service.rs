use itertools::Itertools;

use crate::document_tags::DocumentTagLink;
use crate::model::error::document_errors::DocumentTagError;
use crate::store::{DocumentTagStore, TagRegistry};

/// the tag names linked to the document, in link order. A tag linked more than once only shows up at its first position
pub fn list_tag_names<S: DocumentTagStore>(
    store: &S,
    document_name: &str,
) -> Result<Vec<String>, DocumentTagError> {
    let links = match store.links_for_document(document_name) {
        Ok(links) => links,
        Err(e) => {
            log::error!("Failed to retrieve the tags for document {document_name}: {e:?}");
            return Err(DocumentTagError::DbError);
        }
    };
    Ok(links.into_iter().map(|it| it.tag_name).unique().collect())
}

/// every link for the tag name, regardless of document
pub fn links_for_tag<S: DocumentTagStore>(
    store: &S,
    tag_name: &str,
) -> Result<Vec<DocumentTagLink>, DocumentTagError> {
    store.links_for_tag(tag_name).map_err(|e| {
        log::error!("Failed to retrieve the documents for tag {tag_name}: {e:?}");
        DocumentTagError::DbError
    })
}

/// links each tag name to the document. Names that are already linked to it are skipped,
/// so only the newly created links are returned
pub fn link_tags<S: DocumentTagStore>(
    store: &S,
    document_name: &str,
    tag_names: Vec<String>,
) -> Result<Vec<DocumentTagLink>, DocumentTagError> {
    let document_name = document_name.trim();
    if document_name.is_empty() || tag_names.iter().any(|it| it.trim().is_empty()) {
        return Err(DocumentTagError::BlankName);
    }
    let existing = list_tag_names(store, document_name)?;
    let mut created = Vec::new();
    for tag_name in tag_names.iter().map(|it| it.trim()).unique() {
        if existing.iter().any(|it| it == tag_name) {
            continue;
        }
        match store.create_link(Some(document_name), tag_name) {
            Ok(link) => created.push(link),
            Err(e) => {
                log::error!("Failed to link tag {tag_name} to document {document_name}: {e:?}");
                return Err(DocumentTagError::DbError);
            }
        }
    }
    Ok(created)
}

/// creates an unassigned link for every tag in the registry, so they can later be assigned with [`assign_by_prefix`]
pub fn seed_from_registry<S: TagRegistry + DocumentTagStore>(
    store: &S,
) -> Result<Vec<DocumentTagLink>, DocumentTagError> {
    let definitions = store.list_definitions().map_err(|e| {
        log::error!("Failed to retrieve tag definitions to seed document links: {e:?}");
        DocumentTagError::DbError
    })?;
    let mut created = Vec::with_capacity(definitions.len());
    for definition in definitions {
        match store.create_link(None, &definition.name) {
            Ok(link) => created.push(link),
            Err(e) => {
                log::error!(
                    "Failed to create a document link for tag {}: {e:?}",
                    definition.name
                );
                return Err(DocumentTagError::DbError);
            }
        }
    }
    log::info!("Seeded {} document link(s) from the tag registry", created.len());
    Ok(created)
}

/// assigns every link whose tag name starts with `prefix` to the document. The prefix is case-sensitive
pub fn assign_by_prefix<S: DocumentTagStore>(
    store: &S,
    document_name: &str,
    prefix: &str,
) -> Result<Vec<DocumentTagLink>, DocumentTagError> {
    let document_name = document_name.trim();
    // an empty prefix would grab every link
    if document_name.is_empty() || prefix.is_empty() {
        return Err(DocumentTagError::BlankName);
    }
    let updated = store.assign_by_prefix(document_name, prefix).map_err(|e| {
        log::error!(
            "Failed to assign tags starting with {prefix} to document {document_name}: {e:?}"
        );
        DocumentTagError::DbError
    })?;
    log::info!(
        "Assigned {} link(s) starting with {prefix} to document {document_name}",
        updated.len()
    );
    Ok(updated)
}
