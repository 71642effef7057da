mod definition_tests {
    use crate::tags::repository::{get_all_definitions, get_definition_by_name, save_definition};
    use crate::tags::{TagDefinition, ValueType};
    use crate::test::{cleanup, init_db_folder};

    #[test]
    fn save_definition_creates() {
        let store = init_db_folder();
        let con = store.open_connection().unwrap();
        let saved = save_definition("Due", ValueType::Date, &[], &con).unwrap();
        con.close().unwrap();
        assert_eq!(
            TagDefinition {
                id: 1,
                name: "Due".to_string(),
                value_type: ValueType::Date,
                columns: Vec::new(),
            },
            saved
        );
        cleanup();
    }

    #[test]
    fn save_definition_replaces_type_and_keeps_id() {
        let store = init_db_folder();
        let con = store.open_connection().unwrap();
        save_definition("Steps", ValueType::Text, &[], &con).unwrap();
        let columns = vec!["Step".to_string(), "Expected".to_string()];
        let saved = save_definition("Steps", ValueType::Table, &columns, &con).unwrap();
        let all = get_all_definitions(&con).unwrap();
        con.close().unwrap();
        assert_eq!(1, saved.id);
        assert_eq!(ValueType::Table, saved.value_type);
        assert_eq!(columns, saved.columns);
        assert_eq!(vec![saved], all);
        cleanup();
    }

    #[test]
    fn get_definition_by_name_is_exact() {
        let store = init_db_folder();
        let con = store.open_connection().unwrap();
        save_definition("Owner", ValueType::Text, &[], &con).unwrap();
        let found = get_definition_by_name("Owner", &con).unwrap();
        let not_found = get_definition_by_name("owner", &con).unwrap();
        con.close().unwrap();
        assert_eq!("Owner", found.unwrap().name);
        assert_eq!(None, not_found);
        cleanup();
    }

    #[test]
    fn unknown_type_reads_as_text() {
        let store = init_db_folder();
        let con = store.open_connection().unwrap();
        con.execute(
            "insert into GlobalTags (name, type) values ('Odd', 'hologram')",
            [],
        )
        .unwrap();
        let found = get_definition_by_name("Odd", &con).unwrap().unwrap();
        con.close().unwrap();
        assert_eq!(ValueType::Text, found.value_type);
        cleanup();
    }

    #[test]
    fn unreadable_columns_read_as_none() {
        let store = init_db_folder();
        let con = store.open_connection().unwrap();
        con.execute(
            "insert into GlobalTags (name, type, columns) values ('Grid', 'table', 'not json')",
            [],
        )
        .unwrap();
        let found = get_definition_by_name("Grid", &con).unwrap().unwrap();
        con.close().unwrap();
        assert_eq!(ValueType::Table, found.value_type);
        assert!(found.columns.is_empty());
        cleanup();
    }
}

mod value_tests {
    use crate::tags::repository::{delete_value, get_all_values, get_value_by_name, upsert_value};
    use crate::test::{cleanup, init_db_folder};

    #[test]
    fn upsert_value_creates_then_updates_one_row() {
        let store = init_db_folder();
        let con = store.open_connection().unwrap();
        let created = upsert_value("Owner", "alice", &con).unwrap();
        let updated = upsert_value("Owner", "bob", &con).unwrap();
        let all = get_all_values(&con).unwrap();
        con.close().unwrap();
        assert_eq!(created.id, updated.id);
        assert_eq!(Some("bob".to_string()), updated.raw_value);
        assert_eq!(created.created_at, updated.created_at);
        assert_eq!(vec![updated], all);
        cleanup();
    }

    #[test]
    fn get_value_by_name_not_found() {
        let store = init_db_folder();
        let con = store.open_connection().unwrap();
        let found = get_value_by_name("Owner", &con).unwrap();
        con.close().unwrap();
        assert_eq!(None, found);
        cleanup();
    }

    #[test]
    fn delete_value_reports_whether_a_row_was_removed() {
        let store = init_db_folder();
        let con = store.open_connection().unwrap();
        let created = upsert_value("Owner", "alice", &con).unwrap();
        let deleted = delete_value(created.id, &con).unwrap();
        let deleted_again = delete_value(created.id, &con).unwrap();
        let found = get_value_by_name("Owner", &con).unwrap();
        con.close().unwrap();
        assert!(deleted);
        assert!(!deleted_again);
        assert_eq!(None, found);
        cleanup();
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = init_db_folder();
        let con = store.open_connection().unwrap();
        let first = upsert_value("Owner", "alice", &con).unwrap();
        delete_value(first.id, &con).unwrap();
        let second = upsert_value("Owner", "alice", &con).unwrap();
        con.close().unwrap();
        assert_ne!(first.id, second.id);
        cleanup();
    }
}
