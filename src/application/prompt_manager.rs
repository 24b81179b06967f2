// src/application/prompt_manager.rs
use crate::application::notifier::{
    DELETE_FAILED, DELETE_SUCCEEDED, LOAD_FAILED, SAVE_FAILED, SAVE_SUCCEEDED,
};
use crate::application::{BusyFlag, Notifier};
use crate::domain::validation::validate_required;
use crate::domain::{DomainError, Prompt, PromptFields, PromptId, PromptList};
use tracing::{debug, error, info, instrument};

/// Remote prompt collection.
///
/// Each call maps to exactly one request; implementations must not retry.
pub trait PromptRepository {
    fn list_prompts(&mut self) -> Result<Vec<Prompt>, DomainError>;

    /// Returns the stored prompt including its server-assigned id
    fn create_prompt(&mut self, fields: &PromptFields) -> Result<Prompt, DomainError>;

    fn update_prompt(
        &mut self,
        id: &PromptId,
        fields: &PromptFields,
    ) -> Result<Prompt, DomainError>;

    fn delete_prompt(&mut self, id: &PromptId) -> Result<(), DomainError>;
}

/// Keeps a local prompt list in step with the remote collection.
///
/// Every operation is a pass-through to the repository followed by a patch of
/// the local list. Failures are logged, reported through the notifier and
/// returned; the list is left exactly as it was.
pub struct PromptManager<R: PromptRepository, N: Notifier> {
    repository: R,
    notifier: N,
    prompts: PromptList,
    busy: BusyFlag,
}

impl<R: PromptRepository, N: Notifier> PromptManager<R, N> {
    pub fn new(repository: R, notifier: N) -> Self {
        Self::with_busy_flag(repository, notifier, BusyFlag::new())
    }

    /// Share an existing loading indicator, e.g. one already wired to a view.
    pub fn with_busy_flag(repository: R, notifier: N, busy: BusyFlag) -> Self {
        Self {
            repository,
            notifier,
            prompts: PromptList::new(),
            busy,
        }
    }

    pub fn prompts(&self) -> &[Prompt] {
        self.prompts.as_slice()
    }

    pub fn find(&self, id: &PromptId) -> Option<&Prompt> {
        self.prompts.get(id)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Fetch the full collection and replace the local list with it.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&mut self) -> Result<(), DomainError> {
        let _busy = self.busy.enter();

        match self.repository.list_prompts() {
            Ok(prompts) => {
                info!(count = prompts.len(), "Loaded prompts");
                self.prompts.replace_all(prompts);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error fetching prompts");
                self.notifier.failure(LOAD_FAILED);
                Err(e)
            }
        }
    }

    /// Form submit: create when no record is selected, otherwise update it.
    pub fn submit(
        &mut self,
        selected: Option<&PromptId>,
        fields: &PromptFields,
    ) -> Result<Prompt, DomainError> {
        match selected {
            Some(id) => self.update(id, fields),
            None => self.create(fields),
        }
    }

    #[instrument(level = "debug", skip(self, fields))]
    pub fn create(&mut self, fields: &PromptFields) -> Result<Prompt, DomainError> {
        Self::validate(fields)?;
        let _busy = self.busy.enter();

        match self.repository.create_prompt(fields) {
            Ok(created) => {
                info!(id = %created.id, "Created prompt");
                self.prompts.append(created.clone());
                self.notifier.success(SAVE_SUCCEEDED);
                Ok(created)
            }
            Err(e) => {
                error!(error = %e, "Error saving prompt");
                self.notifier.failure(SAVE_FAILED);
                Err(e)
            }
        }
    }

    #[instrument(level = "debug", skip(self, fields))]
    pub fn update(
        &mut self,
        id: &PromptId,
        fields: &PromptFields,
    ) -> Result<Prompt, DomainError> {
        Self::validate(fields)?;
        let _busy = self.busy.enter();

        match self.repository.update_prompt(id, fields) {
            Ok(updated) => {
                info!(%id, "Updated prompt");
                self.prompts.replace_id(id, updated.clone());
                self.notifier.success(SAVE_SUCCEEDED);
                Ok(updated)
            }
            Err(e) => {
                error!(%id, error = %e, "Error saving prompt");
                self.notifier.failure(SAVE_FAILED);
                Err(e)
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: &PromptId) -> Result<(), DomainError> {
        let _busy = self.busy.enter();

        match self.repository.delete_prompt(id) {
            Ok(()) => {
                info!(%id, "Deleted prompt");
                self.prompts.remove(id);
                self.notifier.success(DELETE_SUCCEEDED);
                Ok(())
            }
            Err(e) => {
                error!(%id, error = %e, "Error deleting prompt");
                self.notifier.failure(DELETE_FAILED);
                Err(e)
            }
        }
    }

    fn validate(fields: &PromptFields) -> Result<(), DomainError> {
        validate_required(fields).map_err(|errors| {
            debug!(missing = errors.len(), "Rejected submission with empty fields");
            DomainError::Validation(errors)
        })
    }
}
