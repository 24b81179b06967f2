// src/constants.rs
//
// Application-wide constants shared between the HTTP client, configuration
// and presentation layers.

/// Resource path of the prompt collection, appended to the API base URL.
///
/// Used in: `infrastructure/http.rs`
pub const PROMPT_RESOURCE_PATH: &str = "/api/prompt";

/// Environment variable holding the API base URL.
///
/// Read once at process start; the `--api-url` flag takes precedence.
///
/// Used in: `infrastructure/config.rs`
pub const API_BASE_URL_ENV: &str = "PROMPT_ADMIN_API_BASE_URL";

/// Directory below the platform config dir that holds the config file.
pub const CONFIG_DIR_NAME: &str = "prompt-admin";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Widest a table cell may get before its text is cut with an ellipsis.
///
/// Used in: `ports/table.rs`
pub const MAX_CELL_WIDTH: usize = 32;
