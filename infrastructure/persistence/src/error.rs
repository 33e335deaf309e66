use business::domain::errors::RepositoryError;

/// Maps a driver error onto the domain's storage error kinds.
pub fn classify(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => RepositoryError::Unavailable,
        sqlx::Error::Database(db) => db
            .code()
            .map_or(RepositoryError::DatabaseError, |code| classify_sqlstate(&code)),
        _ => RepositoryError::DatabaseError,
    }
}

/// PostgreSQL SQLSTATE codes.
pub fn classify_sqlstate(code: &str) -> RepositoryError {
    match code {
        "42P01" => RepositoryError::TableMissing,
        "23505" => RepositoryError::Duplicated,
        c if c.starts_with("23") => RepositoryError::Constraint,
        // connection exceptions, admin shutdown
        c if c.starts_with("08") || c == "57P01" => RepositoryError::Unavailable,
        _ => RepositoryError::DatabaseError,
    }
}
