// src/domain/validation.rs
use crate::domain::PromptFields;
use std::fmt;

/// Inline message for a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("Please enter the {}", field.replace('_', " ")),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check that every field is filled in.
///
/// Whitespace-only input counts as empty. Errors are returned in form order
/// so they can be shown next to their inputs.
pub fn validate_required(fields: &PromptFields) -> Result<(), Vec<FieldError>> {
    let checks: [(&'static str, &str); 7] = [
        ("title", fields.title.as_str()),
        ("description", fields.description.as_str()),
        ("image_url", fields.image_url.as_str()),
        ("type", fields.kind.as_str()),
        ("attention_note", fields.attention_note.as_str()),
        ("example_question", fields.example_question.as_str()),
        ("example_answer", fields.example_answer.as_str()),
    ];

    let errors: Vec<FieldError> = checks
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| FieldError::required(*field))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
