//! Strict decode-with-fallback for semi-structured model output.
//!
//! Remote backends are told to return a raw JSON array, but real responses
//! sometimes show up wrapped in a markdown code fence. We unwrap the fence
//! defensively, then decode; any failure maps to the sentinel proposal at
//! the caller.

use std::collections::BTreeMap;

use pulse_core::constants::{SENTINEL_SOLUTION_TITLE, UNKNOWN_COST};
use pulse_core::errors::GenerationError;
use pulse_core::models::SolutionProposal;

/// Strip one leading and trailing markdown code fence, if present.
/// Handles both ``` and ```json openers. Anything else passes through.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON", ...) up to the first newline.
    let body = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Decode a JSON array of solution proposals, tolerant of both the current
/// and the legacy wire shape. An empty array is treated as malformed: the
/// generator contract guarantees a non-empty sequence.
pub fn decode_solutions(raw: &str) -> Result<Vec<SolutionProposal>, GenerationError> {
    let unwrapped = strip_code_fence(raw);
    let solutions: Vec<SolutionProposal> =
        serde_json::from_str(unwrapped).map_err(|e| GenerationError::MalformedResponse {
            reason: e.to_string(),
        })?;
    if solutions.is_empty() {
        return Err(GenerationError::MalformedResponse {
            reason: "backend returned an empty solution array".to_string(),
        });
    }
    Ok(solutions)
}

/// The proposal returned in place of a failed generation: well-shaped,
/// unknown cost, no resources.
pub fn sentinel_proposal() -> SolutionProposal {
    SolutionProposal {
        title: SENTINEL_SOLUTION_TITLE.to_string(),
        steps: Vec::new(),
        resources: BTreeMap::new(),
        estimated_cost: UNKNOWN_COST.to_string(),
        sentiment: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_plain_text_through() {
        assert_eq!(strip_code_fence("  [1, 2]  "), "[1, 2]");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_code_fence("```\n[1]\n```"), "[1]");
    }

    #[test]
    fn strips_json_fence() {
        assert_eq!(strip_code_fence("```json\n[1]\n```"), "[1]");
    }

    #[test]
    fn decodes_current_shape_array() {
        let raw = r#"[{"solution_title": "Fix the router", "steps": ["Reboot"],
                       "resources": {}, "total_estimated_cost": "Low"}]"#;
        let solutions = decode_solutions(raw).unwrap();
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].title, "Fix the router");
    }

    #[test]
    fn decodes_legacy_shape_array() {
        let raw = r#"[{"solution": "Fix the router", "estimated_cost": "Low",
                       "required_tools": "Screwdriver"}]"#;
        let solutions = decode_solutions(raw).unwrap();
        assert_eq!(solutions[0].title, "Fix the router");
        assert!(solutions[0].steps.is_empty());
    }

    #[test]
    fn decodes_fenced_response() {
        let raw = "```json\n[{\"solution_title\": \"Fix it\"}]\n```";
        let solutions = decode_solutions(raw).unwrap();
        assert_eq!(solutions[0].title, "Fix it");
        assert_eq!(solutions[0].estimated_cost, "Unknown");
    }

    #[test]
    fn prose_is_malformed() {
        assert!(decode_solutions("Sure! Here are some ideas:").is_err());
    }

    #[test]
    fn empty_array_is_malformed() {
        assert!(decode_solutions("[]").is_err());
    }

    #[test]
    fn wrong_shape_is_malformed() {
        // An array of strings, not proposal objects.
        assert!(decode_solutions(r#"["just", "strings"]"#).is_err());
    }

    #[test]
    fn sentinel_is_well_shaped() {
        let p = sentinel_proposal();
        assert_eq!(p.title, "Error generating solutions.");
        assert_eq!(p.estimated_cost, "Unknown");
        assert!(p.resources.is_empty());
    }
}
