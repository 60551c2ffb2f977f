//! Request field checks shared by the services.

use crate::server::error::AppError;

/// Rejects an empty or whitespace-only field with `AppError::BadRequest`.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be blank", field)));
    }

    Ok(())
}

/// Rejects zero or negative amounts with `AppError::BadRequest`.
pub fn require_positive(field: &str, value: i64) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::BadRequest(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }

    Ok(())
}
