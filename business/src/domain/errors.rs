/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// The backing table itself does not exist (schema never applied).
    #[error("repository.table_missing")]
    TableMissing,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.constraint_violation")]
    Constraint,
    /// Timeouts and connectivity failures. Reads are safe to re-invoke.
    #[error("repository.unavailable")]
    Unavailable,
    #[error("repository.database_error")]
    DatabaseError,
}
