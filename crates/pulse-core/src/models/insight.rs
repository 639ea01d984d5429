//! Insights and solution proposals, with forward-compatible wire shapes.
//!
//! The solution-proposal schema has evolved additively across generation
//! backend versions. Legacy records carry `{solution, estimated_cost,
//! required_tools}`; current ones carry `{solution_title, steps, resources,
//! total_estimated_cost, sentiment}`. Decoding accepts either shape and
//! normalizes to the canonical struct; encoding always emits the current
//! shape.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentiment attached to a solution proposal by newer backend versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// One structured, actionable recommendation. Canonical internal shape;
/// see the module docs for the wire shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProposalWire", into = "CurrentProposal")]
pub struct SolutionProposal {
    /// Short description of the proposed solution.
    pub title: String,
    /// Concrete implementation steps, in order. Empty for legacy records.
    pub steps: Vec<String>,
    /// Resource name mapped to a description of why it is needed.
    pub resources: BTreeMap<String, String>,
    /// Free-text cost estimate ("Low (< $100)", "High ($10,000+)", ...).
    pub estimated_cost: String,
    /// Optional sentiment; absent on legacy records.
    pub sentiment: Option<Sentiment>,
}

/// Current wire shape, as emitted by this crate and by current backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CurrentProposal {
    solution_title: String,
    #[serde(default)]
    steps: Vec<String>,
    #[serde(default)]
    resources: BTreeMap<String, String>,
    #[serde(default = "unknown_cost")]
    total_estimated_cost: String,
    #[serde(default)]
    sentiment: Option<Sentiment>,
}

/// Legacy wire shape from earlier backend versions.
#[derive(Debug, Clone, Deserialize)]
struct LegacyProposal {
    solution: String,
    #[serde(default = "unknown_cost")]
    estimated_cost: String,
    #[serde(default)]
    required_tools: String,
}

fn unknown_cost() -> String {
    crate::constants::UNKNOWN_COST.to_string()
}

/// Both shapes a proposal may arrive in. `Current` is tried first; the two
/// are distinguished by their required title field.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProposalWire {
    Current(CurrentProposal),
    Legacy(LegacyProposal),
}

impl From<ProposalWire> for SolutionProposal {
    fn from(wire: ProposalWire) -> Self {
        match wire {
            ProposalWire::Current(p) => Self {
                title: p.solution_title,
                steps: p.steps,
                resources: p.resources,
                estimated_cost: p.total_estimated_cost,
                sentiment: p.sentiment,
            },
            ProposalWire::Legacy(p) => {
                let mut resources = BTreeMap::new();
                if !p.required_tools.is_empty() {
                    resources.insert("Tools".to_string(), p.required_tools);
                }
                Self {
                    title: p.solution,
                    steps: Vec::new(),
                    resources,
                    estimated_cost: p.estimated_cost,
                    sentiment: None,
                }
            }
        }
    }
}

impl From<SolutionProposal> for CurrentProposal {
    fn from(p: SolutionProposal) -> Self {
        Self {
            solution_title: p.title,
            steps: p.steps,
            resources: p.resources,
            total_estimated_cost: p.estimated_cost,
            sentiment: p.sentiment,
        }
    }
}

/// The generated output for one cluster: problem statement plus proposals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Theme label carried over from the cluster.
    pub theme: String,
    /// Number of feedback items that contributed to this insight.
    pub item_count: usize,
    /// Generated problem statement for the cluster.
    pub problem_statement: String,
    /// Ordered, non-empty list of proposals.
    pub solutions: Vec<SolutionProposal>,
    /// Bounded prefix (≤ 3) of the raw source texts, for reference.
    pub sample_texts: Vec<String>,
}
