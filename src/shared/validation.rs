//! Validation Utilities

use validator::{ValidationError, ValidationErrors};

use super::error::{AppError, FieldErrors};

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut fields = FieldErrors::new();

    for (field, errs) in errors.field_errors() {
        let messages = errs.iter().map(|e| {
            e.message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("The {} field is invalid.", field))
        });
        fields.entry(field.to_string()).or_default().extend(messages);
    }

    if fields.is_empty() {
        fields.insert("body".into(), vec!["Validation failed".into()]);
    }

    AppError::Validation(fields)
}

/// Reject strings that are empty once surrounding whitespace is removed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("The field must not be blank.".into());
        return Err(error);
    }
    Ok(())
}
