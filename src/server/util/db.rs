//! Transaction and constraint helpers.

use sea_orm::{
    sqlx, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr,
    IsolationLevel, RuntimeErr, SqlErr, TransactionTrait,
};

use crate::server::error::AppError;

/// Begins a transaction at serializable isolation.
///
/// SQLite does not accept an isolation level on `BEGIN` and already serializes
/// writers, so a plain transaction is opened there.
pub async fn begin_serializable(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    match db.get_database_backend() {
        DbBackend::Sqlite => db.begin().await,
        _ => {
            db.begin_with_config(Some(IsolationLevel::Serializable), None)
                .await
        }
    }
}

/// Maps a unique constraint violation to `AppError::Conflict`, anything else to `AppError::DbErr`.
pub fn conflict_on_unique(err: DbErr, message: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violated: {}", detail);
            AppError::Conflict(message.to_string())
        }
        _ => AppError::DbErr(err),
    }
}

/// Like `conflict_on_unique`, but a busy or locked SQLite database also maps to
/// `AppError::Conflict`.
///
/// A writer that loses the race for a slot key on SQLite usually sees
/// `SQLITE_BUSY` or `SQLITE_LOCKED` rather than the unique violation.
pub fn conflict_on_race(err: DbErr, message: &str) -> AppError {
    if is_busy_or_locked(&err) {
        tracing::debug!("Lost a write race: {}", err);
        return AppError::Conflict(message.to_string());
    }

    conflict_on_unique(err, message)
}

fn is_busy_or_locked(err: &DbErr) -> bool {
    let sqlx_err = match err {
        DbErr::Conn(RuntimeErr::SqlxError(e))
        | DbErr::Exec(RuntimeErr::SqlxError(e))
        | DbErr::Query(RuntimeErr::SqlxError(e)) => e,
        _ => return false,
    };

    let sqlx::Error::Database(db_err) = sqlx_err.as_ref() else {
        return false;
    };

    db_err
        .code()
        .and_then(|code| code.parse::<i32>().ok())
        .map(is_busy_or_locked_code)
        .unwrap_or(false)
}

/// Primary result code of an SQLite (extended) result code is its low byte:
/// 5 is `SQLITE_BUSY`, 6 is `SQLITE_LOCKED`.
fn is_busy_or_locked_code(code: i32) -> bool {
    matches!(code & 0xff, 5 | 6)
}
