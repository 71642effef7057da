use std::fs::remove_file;
use std::path::Path;

use chrono::NaiveDateTime;
use rocket::local::blocking::Client;

use crate::build_rocket;
use crate::document_tags::DocumentTagLink;
use crate::repository::SqliteStore;
use crate::store::{DocumentTagStore, TagRegistry, TagValueStore};
use crate::tags::{TagDefinition, TagValue, ValueType};

pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

pub fn now() -> NaiveDateTime {
    chrono::offset::Local::now().naive_local()
}

/// every test thread gets its own database file so tests can run in parallel
pub fn test_store() -> SqliteStore {
    SqliteStore::new(format!("{}.sqlite", current_thread_name()))
}

/// starts the test off with a freshly created database
pub fn init_db_folder() -> SqliteStore {
    cleanup();
    let store = test_store();
    store.initialize_db().unwrap();
    store
}

pub fn cleanup() {
    let thread_name = current_thread_name();
    remove_file(Path::new(format!("{thread_name}.sqlite").as_str())).unwrap_or(());
}

/// a client against a freshly created database
pub fn client() -> Client {
    Client::tracked(build_rocket(init_db_folder())).unwrap()
}

pub fn create_definition_db_entry(
    name: &str,
    value_type: ValueType,
    columns: &[&str],
) -> TagDefinition {
    let columns: Vec<String> = columns.iter().map(|it| it.to_string()).collect();
    test_store()
        .save_definition(name, value_type, &columns)
        .unwrap()
}

pub fn create_value_db_entry(tag_name: &str, raw_value: &str) -> TagValue {
    test_store().upsert_value(tag_name, raw_value).unwrap()
}

pub fn create_link_db_entry(document_name: Option<&str>, tag_name: &str) -> DocumentTagLink {
    test_store().create_link(document_name, tag_name).unwrap()
}
