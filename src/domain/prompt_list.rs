// src/domain/prompt_list.rs
use crate::domain::{Prompt, PromptId};
use tracing::debug;

/// Local mirror of the server's prompt collection.
///
/// Not authoritative: it holds the last successful server response and is
/// patched record by record after successful mutations. Every patch is keyed
/// by id, so responses may be applied in any order and the last one to arrive
/// for a given id wins. Ids stay unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptList {
    items: Vec<Prompt>,
}

impl PromptList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[Prompt] {
        &self.items
    }

    pub fn get(&self, id: &PromptId) -> Option<&Prompt> {
        self.items.iter().find(|p| p.id == *id)
    }

    /// Replace the whole list, keeping response order.
    pub fn replace_all(&mut self, prompts: Vec<Prompt>) {
        debug!(count = prompts.len(), "Replacing prompt list");
        self.items = prompts;
    }

    /// Add a newly created prompt at the end.
    ///
    /// If the id is already present the existing entry is overwritten in place.
    pub fn append(&mut self, prompt: Prompt) {
        match self.position(&prompt.id) {
            Some(index) => {
                debug!(id = %prompt.id, "Prompt already listed, replacing in place");
                self.items[index] = prompt;
            }
            None => self.items.push(prompt),
        }
    }

    /// Overwrite the entry listed under `id` with `prompt`.
    ///
    /// The entry keeps `id` even if `prompt` carries another one, so no other
    /// entry is touched. Returns false if nothing is listed under `id`.
    pub fn replace_id(&mut self, id: &PromptId, prompt: Prompt) -> bool {
        match self.position(id) {
            Some(index) => {
                if prompt.id != *id {
                    debug!(requested = %id, returned = %prompt.id, "Keeping requested id");
                }
                self.items[index] = Prompt {
                    id: id.clone(),
                    fields: prompt.fields,
                };
                true
            }
            None => {
                debug!(%id, "No listed prompt to replace");
                false
            }
        }
    }

    /// Drop the entry with this id. Returns false if none matched.
    pub fn remove(&mut self, id: &PromptId) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != *id);
        before != self.items.len()
    }

    fn position(&self, id: &PromptId) -> Option<usize> {
        self.items.iter().position(|p| p.id == *id)
    }
}

impl From<Vec<Prompt>> for PromptList {
    fn from(items: Vec<Prompt>) -> Self {
        Self { items }
    }
}
