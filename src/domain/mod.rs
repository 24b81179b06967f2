// src/domain/mod.rs
pub mod error;
pub mod prompt;
pub mod prompt_list;
pub mod validation;

pub use error::DomainError;
pub use prompt::{Prompt, PromptDraft, PromptFields, PromptId};
pub use prompt_list::PromptList;
pub use validation::FieldError;
