// src/infrastructure/http.rs
use crate::application::PromptRepository;
use crate::constants::PROMPT_RESOURCE_PATH;
use crate::domain::{DomainError, Prompt, PromptFields, PromptId};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Prompt collection behind the REST API at `<base_url>/api/prompt`.
#[derive(Debug)]
pub struct HttpPromptRepository {
    client: Client,
    base_url: String,
}

impl HttpPromptRepository {
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        // Requests are sent once and never time out.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.trim_end_matches('/').to_string();
        debug!(%base_url, "Creating new HttpPromptRepository");

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, PROMPT_RESOURCE_PATH)
    }

    fn item_url(&self, id: &PromptId) -> String {
        format!("{}{}/{}", self.base_url, PROMPT_RESOURCE_PATH, id)
    }

    /// Send the request and turn any non-2xx answer into a status error.
    fn send(request: RequestBuilder) -> Result<Response, DomainError> {
        let resp = request
            .send()
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let body = resp.text().unwrap_or_default();
            debug!(status = status.as_u16(), %body, "Request rejected by server");
            Err(DomainError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, DomainError> {
        resp.json::<T>()
            .map_err(|e| DomainError::Decode(e.to_string()))
    }
}

impl PromptRepository for HttpPromptRepository {
    /// GET /api/prompt
    #[instrument(level = "debug", skip(self))]
    fn list_prompts(&mut self) -> Result<Vec<Prompt>, DomainError> {
        let resp = Self::send(self.client.get(self.collection_url()))?;
        Self::decode(resp)
    }

    /// POST /api/prompt
    #[instrument(level = "debug", skip(self, fields))]
    fn create_prompt(&mut self, fields: &PromptFields) -> Result<Prompt, DomainError> {
        let resp = Self::send(self.client.post(self.collection_url()).json(fields))?;
        Self::decode(resp)
    }

    /// PUT /api/prompt/{id}
    #[instrument(level = "debug", skip(self, fields))]
    fn update_prompt(
        &mut self,
        id: &PromptId,
        fields: &PromptFields,
    ) -> Result<Prompt, DomainError> {
        let resp = Self::send(self.client.put(self.item_url(id)).json(fields))?;
        Self::decode(resp)
    }

    /// DELETE /api/prompt/{id}
    #[instrument(level = "debug", skip(self))]
    fn delete_prompt(&mut self, id: &PromptId) -> Result<(), DomainError> {
        Self::send(self.client.delete(self.item_url(id)))?;
        Ok(())
    }
}
