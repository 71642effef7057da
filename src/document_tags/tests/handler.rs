use rocket::http::{ContentType, Status};

use crate::tags::ValueType;
use crate::test::*;

#[test]
fn link_then_resolve_document_tags() {
    let client = client();
    create_definition_db_entry("Due", ValueType::Date, &[]);
    create_value_db_entry("Due", "2024-03-05");
    let res = client
        .post(uri!("/api/documents/plan/tags"))
        .header(ContentType::JSON)
        .body(r#"{"tagNames":["Due","Owner"]}"#)
        .dispatch();
    assert_eq!(Status::Created, res.status());
    let res = client.get(uri!("/api/documents/plan/tags")).dispatch();
    assert_eq!(Status::Ok, res.status());
    let body = res.into_string().unwrap();
    assert!(body.contains(r#""display":{"kind":"text","text":"05/03/2024"}"#));
    assert!(body.contains(r#""tagName":"Owner","valueType":"text","defined":false"#));
    cleanup();
}

#[test]
fn document_tag_names() {
    let client = client();
    create_link_db_entry(Some("plan"), "B");
    create_link_db_entry(Some("plan"), "A");
    create_link_db_entry(Some("plan"), "B");
    let res = client.get(uri!("/api/documents/plan/tag-names")).dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(r#"["B","A"]"#, res.into_string().unwrap());
    cleanup();
}

#[test]
fn link_blank_tag_name() {
    let client = client();
    let res = client
        .post(uri!("/api/documents/plan/tags"))
        .header(ContentType::JSON)
        .body(r#"{"tagNames":[" "]}"#)
        .dispatch();
    assert_eq!(Status::BadRequest, res.status());
    cleanup();
}

#[test]
fn seed_and_assign_by_prefix() {
    let client = client();
    create_definition_db_entry("TP_Steps", ValueType::Table, &["Step"]);
    create_definition_db_entry("Owner", ValueType::Text, &[]);
    let res = client.post(uri!("/api/document-tags/seed")).dispatch();
    assert_eq!(Status::Created, res.status());
    let res = client
        .put(uri!("/api/documents/plan/tags/prefix/TP_"))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let res = client.get(uri!("/api/document-tags/Owner")).dispatch();
    assert_eq!(Status::Ok, res.status());
    assert!(res.into_string().unwrap().contains(r#""documentName":null"#));
    cleanup();
}
