/// failures surfaced by any of the store traits in [`crate::store`]
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum StoreError {
    /// the referenced row does not exist. Callers are expected to fall back instead of failing
    NotFound,
    /// the backing store could not be reached or the query failed. Nothing was written
    Unavailable,
}
