#[derive(PartialEq, Debug)]
pub enum GetDefinitionError {
    /// an error with the database
    DbError,
    /// no tag with that name has been declared
    NotFound,
}

#[derive(PartialEq, Debug)]
pub enum DeclareDefinitionError {
    /// an error with the database
    DbError,
    /// the tag name was empty or only whitespace
    BlankName,
    /// columns were passed for a tag that isn't table typed
    ColumnsRequireTable,
    /// one of the column names was empty or only whitespace
    BlankColumn,
    /// the same column name was declared more than once
    DuplicateColumn(String),
}

#[derive(PartialEq, Debug)]
pub enum GetTagValueError {
    /// an error with the database
    DbError,
}

#[derive(PartialEq, Debug)]
pub enum DeleteTagValueError {
    /// an error with the database
    DbError,
    /// no value with the passed id exists
    NotFound,
}
