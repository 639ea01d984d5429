//! Remote text-completion generation backend.
//!
//! Blocking HTTP against a configured endpoint, bearer-token auth from
//! config. Every failure — network, status, decode — is logged and
//! converted to the sentinel output for that operation; nothing propagates
//! to the orchestrator and nothing is retried here.

use pulse_core::config::GenerationConfig;
use pulse_core::constants::SENTINEL_PROBLEM_STATEMENT;
use pulse_core::errors::GenerationError;
use pulse_core::models::SolutionProposal;
use pulse_core::traits::InsightGenerator;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::parse;

/// One text-completion request.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
    max_output_tokens: u32,
}

/// The completion response; unknown fields are ignored for forward
/// compatibility.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    text: String,
}

/// Generator backed by a remote text-completion service.
pub struct RemoteGenerator {
    client: reqwest::blocking::Client,
    config: GenerationConfig,
}

impl RemoteGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            config,
        }
    }

    /// Issue one completion call. Blocking, no timeout management, no
    /// retries; the caller maps errors to sentinels.
    fn complete(
        &self,
        prompt: &str,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<String, GenerationError> {
        let endpoint =
            self.config
                .endpoint
                .as_deref()
                .ok_or_else(|| GenerationError::RequestFailed {
                    reason: "no endpoint configured".to_string(),
                })?;

        let mut request = self.client.post(endpoint).json(&CompletionRequest {
            model: &self.config.model,
            prompt,
            temperature,
            max_output_tokens,
        });
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| GenerationError::RequestFailed {
                reason: e.to_string(),
            })?
            .error_for_status()
            .map_err(|e| GenerationError::RequestFailed {
                reason: e.to_string(),
            })?;

        let completion: CompletionResponse =
            response
                .json()
                .map_err(|e| GenerationError::MalformedResponse {
                    reason: e.to_string(),
                })?;
        Ok(completion.text)
    }

    fn statement_prompt(texts: &[String]) -> String {
        let combined: String = texts
            .iter()
            .map(|t| format!("- {t}\n"))
            .collect();
        format!(
            "Analysis of student feedback:\n{combined}\n\
             Based on the above comments, write a concise problem statement \
             describing the main issue.\nProblem statement:"
        )
    }

    fn solutions_prompt(problem_statement: &str) -> String {
        format!(
            "Problem: {problem_statement}\n\n\
             Suggest 3 concrete, actionable solutions or improvements for this issue.\n\
             For each solution provide a title, ordered implementation steps, required \
             resources, a total estimated cost (Low/Medium/High plus a rough amount), \
             and a sentiment (Positive/Neutral/Negative).\n\
             Return the response as a valid JSON array of objects with keys: \
             \"solution_title\", \"steps\", \"resources\", \"total_estimated_cost\", \
             \"sentiment\".\n\
             Do not acknowledge or wrap in markdown. Just the raw JSON."
        )
    }
}

impl InsightGenerator for RemoteGenerator {
    fn generate_problem_statement(&self, texts: &[String]) -> String {
        let prompt = Self::statement_prompt(texts);
        match self.complete(
            &prompt,
            self.config.statement_temperature,
            self.config.statement_max_tokens,
        ) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "problem statement generation failed");
                SENTINEL_PROBLEM_STATEMENT.to_string()
            }
        }
    }

    fn suggest_solutions(&self, problem_statement: &str) -> Vec<SolutionProposal> {
        let prompt = Self::solutions_prompt(problem_statement);
        let decoded = self
            .complete(
                &prompt,
                self.config.solutions_temperature,
                self.config.solutions_max_tokens,
            )
            .and_then(|text| parse::decode_solutions(&text));
        match decoded {
            Ok(solutions) => {
                debug!(count = solutions.len(), "decoded remote solutions");
                solutions
            }
            Err(e) => {
                warn!(error = %e, "solution generation failed, returning sentinel");
                vec![parse::sentinel_proposal()]
            }
        }
    }

    fn name(&self) -> &str {
        "remote"
    }
}
