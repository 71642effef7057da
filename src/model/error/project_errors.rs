#[derive(PartialEq, Debug)]
pub enum GetProjectError {
    /// an error with the database
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum CreateProjectError {
    /// an error with the database
    DbError,
    /// the project or document must have a non-blank name
    BlankName,
}

#[derive(PartialEq, Debug)]
pub enum UpdateProjectError {
    /// an error with the database
    DbError,
    /// no project with the passed id exists
    NotFound,
    /// the new name was blank
    BlankName,
}
