/// Domain-level error shared across the workspace.
///
/// The HTTP layer maps each variant onto a status code; see
/// `apexverse_api::error::AppError`.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup or delete by id found no row. `entity` is the
    /// human-readable label used in the client-facing message.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: String },

    /// Caller-fixable input problem. The message names the offending
    /// field and constraint and is returned to the client verbatim.
    #[error("{0}")]
    Validation(String),
}
