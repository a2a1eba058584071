use folio_core::error::CoreError;

/// Error returned by repository operations.
///
/// Domain failures (validation, missing rows) arrive as [`CoreError`];
/// anything the storage engine reports is passed through as `sqlx::Error`.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl DbError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        DbError::Core(CoreError::NotFound { entity, id })
    }
}

/// Turn a unique-constraint violation on `column` into a field error.
///
/// Other errors are returned unchanged.
pub(crate) fn unique_violation_as_field(
    err: sqlx::Error,
    column: &'static str,
    message: &str,
) -> DbError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.message().contains(column) {
            return DbError::Core(CoreError::field(column, message));
        }
    }
    DbError::Sqlx(err)
}
