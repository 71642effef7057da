#[derive(PartialEq, Debug)]
pub enum DocumentTagError {
    /// an error with the database
    DbError,
    /// the tag name or document name was blank
    BlankName,
}

#[derive(PartialEq, Debug)]
pub enum ResolveError {
    /// an error with the database
    DbError,
}
