use mockito::{Mock, Server, ServerGuard};
use prompt_admin::domain::{Prompt, PromptFields};
use prompt_admin::infrastructure::HttpPromptRepository;
use serde_json::{json, Value};

pub const COLLECTION_PATH: &str = "/api/prompt";

/// Mock prompt API backed by a local mockito server
pub struct TestServer {
    pub server: ServerGuard,
}

#[allow(dead_code)]
impl TestServer {
    pub fn new() -> Self {
        Self {
            server: Server::new(),
        }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Repository pointed at this server
    pub fn repository(&self) -> HttpPromptRepository {
        HttpPromptRepository::new(&self.server.url()).expect("Client should build")
    }

    /// GET /api/prompt answering with the given prompts, expected exactly once
    pub fn mock_list(&mut self, prompts: &[Value]) -> Mock {
        self.server
            .mock("GET", COLLECTION_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(prompts.to_vec()).to_string())
            .expect(1)
            .create()
    }

    pub fn item_path(id: impl std::fmt::Display) -> String {
        format!("{}/{}", COLLECTION_PATH, id)
    }
}

/// Wire representation of a prompt, as the server sends it
#[allow(dead_code)]
pub fn prompt_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("Description of {title}"),
        "imageUrl": "https://example.com/prompt.png",
        "type": "chat",
        "attention_note": "Answer in one paragraph",
        "example_question": "What is a tree?",
        "example_answer": "A connected acyclic graph."
    })
}

/// Request body the client sends for these fields
#[allow(dead_code)]
pub fn fields_json(fields: &PromptFields) -> Value {
    serde_json::to_value(fields).expect("Fields should serialize")
}

#[allow(dead_code)]
pub fn ids(prompts: &[Prompt]) -> Vec<String> {
    prompts.iter().map(|p| p.id.to_string()).collect()
}
