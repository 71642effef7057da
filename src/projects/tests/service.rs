mod project_tests {
    use crate::model::error::project_errors::{CreateProjectError, UpdateProjectError};
    use crate::projects::service::{create_project, list_projects, update_project};
    use crate::projects::{CreateProjectRequest, UpdateProjectRequest};
    use crate::test::{cleanup, init_db_folder};

    fn create(name: &str) -> CreateProjectRequest {
        CreateProjectRequest {
            name: name.to_string(),
            description: None,
        }
    }

    #[test]
    fn create_and_list_projects() {
        let store = init_db_folder();
        let first = create_project(&store, create("Apollo")).unwrap();
        let second = create_project(&store, create(" Gemini ")).unwrap();
        assert_eq!("Gemini", second.name);
        assert_eq!(Ok(vec![first, second]), list_projects(&store));
        cleanup();
    }

    #[test]
    fn create_project_blank_name() {
        let store = init_db_folder();
        assert_eq!(
            Err(CreateProjectError::BlankName),
            create_project(&store, create(""))
        );
        cleanup();
    }

    #[test]
    fn update_project_success() {
        let store = init_db_folder();
        let created = create_project(&store, create("Apollo")).unwrap();
        let updated = update_project(
            &store,
            UpdateProjectRequest {
                id: created.id,
                name: "Artemis".to_string(),
                description: Some("the sequel".to_string()),
            },
        )
        .unwrap();
        assert_eq!(created.id, updated.id);
        assert_eq!("Artemis", updated.name);
        assert_eq!(Some("the sequel".to_string()), updated.description);
        cleanup();
    }

    #[test]
    fn update_project_not_found() {
        let store = init_db_folder();
        let res = update_project(
            &store,
            UpdateProjectRequest {
                id: 99,
                name: "Artemis".to_string(),
                description: None,
            },
        );
        assert_eq!(Err(UpdateProjectError::NotFound), res);
        cleanup();
    }
}

mod document_tests {
    use crate::model::error::project_errors::CreateProjectError;
    use crate::projects::service::{
        create_global_document, create_project_document, list_global_documents,
        list_project_documents,
    };
    use crate::projects::{CreateGlobalDocumentRequest, CreateProjectDocumentRequest};
    use crate::test::{cleanup, init_db_folder};

    fn attach(project_name: &str, document_id: &str) -> CreateProjectDocumentRequest {
        CreateProjectDocumentRequest {
            project_name: project_name.to_string(),
            document_id: document_id.to_string(),
            document_description: None,
        }
    }

    #[test]
    fn project_documents_filter_by_project() {
        let store = init_db_folder();
        let plan = create_project_document(&store, attach("Apollo", "test plan")).unwrap();
        let other = create_project_document(&store, attach("Gemini", "test plan")).unwrap();
        assert_eq!(
            Ok(vec![plan.clone()]),
            list_project_documents(&store, Some("Apollo"))
        );
        assert_eq!(
            Ok(vec![plan, other]),
            list_project_documents(&store, None)
        );
        cleanup();
    }

    #[test]
    fn project_document_requires_names() {
        let store = init_db_folder();
        assert_eq!(
            Err(CreateProjectError::BlankName),
            create_project_document(&store, attach("Apollo", " "))
        );
        cleanup();
    }

    #[test]
    fn global_document_title_defaults_to_document_id() {
        let store = init_db_folder();
        let untitled = create_global_document(
            &store,
            CreateGlobalDocumentRequest {
                title: None,
                document_id: "test-plan".to_string(),
                document_description: None,
            },
        )
        .unwrap();
        let titled = create_global_document(
            &store,
            CreateGlobalDocumentRequest {
                title: Some("Release notes".to_string()),
                document_id: "notes".to_string(),
                document_description: Some("what changed".to_string()),
            },
        )
        .unwrap();
        assert_eq!("test-plan", untitled.title);
        assert_eq!("Release notes", titled.title);
        assert_eq!(Ok(vec![untitled, titled]), list_global_documents(&store));
        cleanup();
    }
}
