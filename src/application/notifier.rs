// src/application/notifier.rs

/// User-facing notices about finished operations.
///
/// Messages are generic ("Save failed"); details go to the log.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn failure(&mut self, message: &str);
}

pub const LOAD_FAILED: &str = "Load failed";
pub const SAVE_SUCCEEDED: &str = "Saved successfully";
pub const SAVE_FAILED: &str = "Save failed";
pub const DELETE_SUCCEEDED: &str = "Deleted successfully";
pub const DELETE_FAILED: &str = "Delete failed";
