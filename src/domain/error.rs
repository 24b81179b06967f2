// src/domain/error.rs
use crate::domain::{FieldError, PromptId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Prompt not found: {0}")]
    PromptNotFound(PromptId),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid response body: {0}")]
    Decode(String),
    #[error("Missing required fields: {}", format_fields(.0))]
    Validation(Vec<FieldError>),
    #[error("Configuration error: {0}")]
    Config(String),
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field)
        .collect::<Vec<_>>()
        .join(", ")
}
