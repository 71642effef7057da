#[macro_use]
extern crate rocket;

use rocket::{Build, Rocket};

use crate::config::DASHBOARD_CONFIG;
use crate::handler::api_handler::{api_version, health};
use crate::handler::cors::Cors;
use crate::logging::setup_logger;
use crate::repository::SqliteStore;

mod config;
mod db_migrations;
mod document_tags;
mod handler;
mod logging;
mod model;
mod projects;
mod repository;
mod resolver;
mod store;
mod tags;
#[cfg(test)]
mod test;

/// builds the server around `store` with every route mounted. The database is expected to already be initialized
pub fn build_rocket(store: SqliteStore) -> Rocket<Build> {
    rocket::build()
        .manage(store)
        .attach(Cors)
        .mount("/api", routes![api_version, health])
        .mount(
            "/api/projects",
            routes![
                projects::handler::list_projects,
                projects::handler::create_project,
                projects::handler::update_project,
            ],
        )
        .mount(
            "/api/project-documents",
            routes![
                projects::handler::list_project_documents,
                projects::handler::create_project_document,
            ],
        )
        .mount(
            "/api/documents",
            routes![
                projects::handler::list_global_documents,
                projects::handler::create_global_document,
                document_tags::handler::get_document_tags,
                document_tags::handler::get_document_tag_names,
                document_tags::handler::link_document_tags,
                document_tags::handler::assign_tags_by_prefix,
            ],
        )
        .mount(
            "/api/document-tags",
            routes![
                document_tags::handler::get_tag_links,
                document_tags::handler::seed_document_tags,
            ],
        )
        .mount(
            "/api/tags",
            routes![
                tags::handler::list_definitions,
                tags::handler::get_definition,
                tags::handler::declare_definition,
                tags::handler::list_values,
                tags::handler::delete_value,
                resolver::handler::resolve_all_tags,
                resolver::handler::resolve_tag,
                resolver::handler::save_tag_value,
                resolver::handler::dismiss_tag_value,
            ],
        )
}

#[launch]
fn rocket() -> Rocket<Build> {
    if let Err(e) = setup_logger(&DASHBOARD_CONFIG.logging) {
        eprintln!("Failed to set up logging: {e:?}");
    }
    let store = SqliteStore::from_config();
    if let Err(e) = store.initialize_db() {
        log::error!(
            "Failed to initialize the database at {:?}: {e:?}",
            store.location()
        );
        panic!("Failed to initialize the database at {:?}: {e:?}", store.location());
    }
    log::info!("Using database at {:?}", store.location());
    let figment = rocket::Config::figment().merge(("port", DASHBOARD_CONFIG.server.port));
    build_rocket(store).configure(figment)
}
