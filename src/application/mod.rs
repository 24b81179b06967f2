// src/application/mod.rs
pub mod busy;
pub mod notifier;
pub mod prompt_manager;

pub use busy::{BusyFlag, BusyGuard};
pub use notifier::Notifier;
pub use prompt_manager::{PromptManager, PromptRepository};
