use serde::{Deserialize, Serialize};

/// Environment variable naming the remote text-completion endpoint.
/// Its presence selects the remote generation backend.
pub const ENDPOINT_ENV: &str = "PULSE_GENERATION_URL";

/// Environment variable holding the bearer token for the remote backend.
pub const TOKEN_ENV: &str = "PULSE_GENERATION_TOKEN";

/// Generation backend configuration.
///
/// Temperatures and token budgets differ between the two operations:
/// problem statements want low-variance summaries, solution lists tolerate
/// more creative output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Remote text-completion endpoint; `None` selects the local backend.
    pub endpoint: Option<String>,
    /// Bearer token sent with remote requests.
    pub token: Option<String>,
    /// Model identifier passed to the remote service.
    pub model: String,
    /// Sampling temperature for problem statements.
    pub statement_temperature: f32,
    /// Output token budget for problem statements.
    pub statement_max_tokens: u32,
    /// Sampling temperature for solution lists.
    pub solutions_temperature: f32,
    /// Output token budget for solution lists.
    pub solutions_max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            token: None,
            model: "text-bison".to_string(),
            statement_temperature: 0.2,
            statement_max_tokens: 256,
            solutions_temperature: 0.4,
            solutions_max_tokens: 1024,
        }
    }
}

impl GenerationConfig {
    /// Resolve endpoint and token from process environment. Everything
    /// else keeps its default.
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var(ENDPOINT_ENV).ok().filter(|v| !v.is_empty()),
            token: std::env::var(TOKEN_ENV).ok().filter(|v| !v.is_empty()),
            ..Self::default()
        }
    }
}
