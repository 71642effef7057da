pub mod document_errors;
pub mod edit_errors;
pub mod project_errors;
pub mod store_errors;
pub mod tag_errors;
