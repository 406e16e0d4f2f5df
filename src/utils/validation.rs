//! Input validation utilities

use validator::ValidationErrors;

use crate::error::{AppError, AppResult};

/// Validate a judge's score
pub fn validate_score(score: f64) -> AppResult<()> {
    if !score.is_finite() {
        return Err(AppError::InvalidScore(score));
    }
    Ok(())
}

/// Pick one human-readable message out of a validator error set.
///
/// Fields are visited in name order so the same input always yields the same message.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for {}", field),
            })
        })
        .unwrap_or_else(|| "Invalid input".to_string())
}
