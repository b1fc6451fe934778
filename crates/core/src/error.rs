#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Any failure reported by the record store (connectivity, query
    /// execution). Never recovered into a partial result.
    #[error("Store failure: {0}")]
    StoreFailure(String),
}
