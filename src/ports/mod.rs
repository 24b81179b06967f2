// src/ports/mod.rs
pub mod console;
pub mod table;

pub use console::ConsoleNotifier;
pub use table::TablePresenter;
