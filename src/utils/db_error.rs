/// SQLite reports unique violations as `UNIQUE constraint failed: <table>.<column>`.
const SHORT_CODE_COLUMN: &str = "urls.short_code";

/// Returns true if the error is a unique violation on `urls.short_code`.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains(SHORT_CODE_COLUMN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_violation() {
        assert!(!is_unique_violation_on_code(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation_on_code(&sqlx::Error::PoolTimedOut));
    }
}
