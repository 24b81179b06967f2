// src/util/testing.rs

use anyhow::Result;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::application::{BusyFlag, Notifier, PromptRepository};
use crate::domain::{DomainError, Prompt, PromptFields, PromptId};

/// A request as seen by the mock repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryCall {
    List,
    Create(PromptFields),
    Update(PromptId, PromptFields),
    Delete(PromptId),
}

/// In-memory stand-in for the remote prompt collection.
///
/// Behaves like a well-formed server: create assigns ids, update and delete
/// answer 404 for unknown ids. Individual operations can be configured to
/// fail with a 500, and every call is logged for assertions.
///
/// # Examples
///
/// ```
/// use prompt_admin::util::testing::{sample_prompt, MockPromptRepository};
///
/// let mock = MockPromptRepository::builder()
///     .with_prompt(sample_prompt(1, "Summarize"))
///     .with_next_id(10)
///     .with_delete_failure(1)
///     .build();
/// ```
pub struct MockPromptRepository {
    server: Vec<Prompt>,
    next_id: i64,
    fail_list: bool,
    fail_create: bool,
    fail_update: HashSet<PromptId>,
    fail_delete: HashSet<PromptId>,
    update_responses: HashMap<PromptId, Prompt>,
    busy_probe: Option<BusyFlag>,
    calls: Vec<RepositoryCall>,
    busy_observations: Vec<bool>,
}

impl MockPromptRepository {
    pub fn builder() -> MockPromptRepositoryBuilder {
        MockPromptRepositoryBuilder::new()
    }

    /// Requests received so far, in order
    pub fn calls(&self) -> &[RepositoryCall] {
        &self.calls
    }

    /// State of the busy probe at the start of each request
    pub fn busy_observations(&self) -> &[bool] {
        &self.busy_observations
    }

    /// Current server-side state
    pub fn server_prompts(&self) -> &[Prompt] {
        &self.server
    }

    pub fn set_list_failure(&mut self, fail: bool) {
        self.fail_list = fail;
    }

    fn record(&mut self, call: RepositoryCall) {
        if let Some(probe) = &self.busy_probe {
            self.busy_observations.push(probe.is_busy());
        }
        self.calls.push(call);
    }

    fn server_error() -> DomainError {
        DomainError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        }
    }

    fn not_found() -> DomainError {
        DomainError::Status {
            status: 404,
            body: "Not Found".to_string(),
        }
    }
}

impl PromptRepository for MockPromptRepository {
    fn list_prompts(&mut self) -> Result<Vec<Prompt>, DomainError> {
        self.record(RepositoryCall::List);
        if self.fail_list {
            return Err(Self::server_error());
        }
        Ok(self.server.clone())
    }

    fn create_prompt(&mut self, fields: &PromptFields) -> Result<Prompt, DomainError> {
        self.record(RepositoryCall::Create(fields.clone()));
        if self.fail_create {
            return Err(Self::server_error());
        }
        let created = Prompt::new(self.next_id, fields.clone());
        self.next_id += 1;
        self.server.push(created.clone());
        Ok(created)
    }

    fn update_prompt(
        &mut self,
        id: &PromptId,
        fields: &PromptFields,
    ) -> Result<Prompt, DomainError> {
        self.record(RepositoryCall::Update(id.clone(), fields.clone()));
        if self.fail_update.contains(id) {
            return Err(Self::server_error());
        }
        let updated = self
            .update_responses
            .get(id)
            .cloned()
            .unwrap_or_else(|| Prompt::new(id.clone(), fields.clone()));
        let stored = self
            .server
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(Self::not_found)?;
        *stored = updated.clone();
        Ok(updated)
    }

    fn delete_prompt(&mut self, id: &PromptId) -> Result<(), DomainError> {
        self.record(RepositoryCall::Delete(id.clone()));
        if self.fail_delete.contains(id) {
            return Err(Self::server_error());
        }
        let before = self.server.len();
        self.server.retain(|p| p.id != *id);
        if self.server.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

/// Builder for MockPromptRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockPromptRepositoryBuilder {
    server: Vec<Prompt>,
    next_id: Option<i64>,
    fail_list: bool,
    fail_create: bool,
    fail_update: HashSet<PromptId>,
    fail_delete: HashSet<PromptId>,
    update_responses: HashMap<PromptId, Prompt>,
    busy_probe: Option<BusyFlag>,
}

impl MockPromptRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            server: vec![],
            next_id: None,
            fail_list: false,
            fail_create: false,
            fail_update: HashSet::new(),
            fail_delete: HashSet::new(),
            update_responses: HashMap::new(),
            busy_probe: None,
        }
    }

    /// Add a prompt to the server-side collection, in list order
    pub fn with_prompt(mut self, prompt: Prompt) -> Self {
        self.server.push(prompt);
        self
    }

    /// Id assigned to the next created prompt (default: highest numeric id + 1)
    pub fn with_next_id(mut self, id: i64) -> Self {
        self.next_id = Some(id);
        self
    }

    pub fn with_list_failure(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn with_create_failure(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn with_update_failure(mut self, id: impl Into<PromptId>) -> Self {
        self.fail_update.insert(id.into());
        self
    }

    pub fn with_delete_failure(mut self, id: impl Into<PromptId>) -> Self {
        self.fail_delete.insert(id.into());
        self
    }

    /// Answer updates of `id` with this prompt instead of echoing the request
    pub fn with_update_response(mut self, id: impl Into<PromptId>, prompt: Prompt) -> Self {
        self.update_responses.insert(id.into(), prompt);
        self
    }

    /// Record whether this flag is set whenever a request arrives
    pub fn with_busy_probe(mut self, flag: BusyFlag) -> Self {
        self.busy_probe = Some(flag);
        self
    }

    pub fn build(self) -> MockPromptRepository {
        let next_id = self.next_id.unwrap_or_else(|| {
            self.server
                .iter()
                .filter_map(|p| p.id.as_number())
                .max()
                .unwrap_or(0)
                + 1
        });

        MockPromptRepository {
            server: self.server,
            next_id,
            fail_list: self.fail_list,
            fail_create: self.fail_create,
            fail_update: self.fail_update,
            fail_delete: self.fail_delete,
            update_responses: self.update_responses,
            busy_probe: self.busy_probe,
            calls: vec![],
            busy_observations: vec![],
        }
    }
}

impl Default for MockPromptRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifier that keeps every message for later inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub successes: Vec<String>,
    pub failures: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn failure(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}

/// A field set that passes validation, distinguished by its title
pub fn complete_fields(title: &str) -> PromptFields {
    PromptFields {
        title: title.to_string(),
        description: format!("Description of {title}"),
        image_url: "https://example.com/prompt.png".to_string(),
        kind: "chat".to_string(),
        attention_note: "Answer in one paragraph".to_string(),
        example_question: "What is a tree?".to_string(),
        example_answer: "A connected acyclic graph.".to_string(),
    }
}

pub fn sample_prompt(id: impl Into<PromptId>, title: &str) -> Prompt {
    Prompt::new(id, complete_fields(title))
}

pub fn init_test_setup() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("prompt_admin=debug"));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init()
    {
        debug!("Tracing subscriber already set: {}", e);
    }

    info!("Test Setup complete");
    Ok(())
}
