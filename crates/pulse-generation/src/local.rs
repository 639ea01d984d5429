//! Deterministic local generation backend.
//!
//! No external calls: the problem statement is templated from the first
//! text, and solutions come from first-match-wins keyword groups over the
//! lowercased statement. Used offline, in tests, and as the fallback when
//! no remote endpoint is configured.

use std::collections::BTreeMap;

use pulse_core::models::{Sentiment, SolutionProposal};
use pulse_core::traits::InsightGenerator;

/// Longest prefix of the first text quoted in the templated statement.
const STATEMENT_PREFIX_CHARS: usize = 50;

/// Rule-based generator with canned, fully-populated proposals.
#[derive(Debug, Default)]
pub struct LocalGenerator;

impl LocalGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl InsightGenerator for LocalGenerator {
    fn generate_problem_statement(&self, texts: &[String]) -> String {
        let prefix: String = texts
            .first()
            .map(|t| t.chars().take(STATEMENT_PREFIX_CHARS).collect())
            .unwrap_or_default();
        format!("Students are expressing concerns regarding: {prefix}...")
    }

    fn suggest_solutions(&self, problem_statement: &str) -> Vec<SolutionProposal> {
        let text = problem_statement.to_lowercase();

        // First-match-wins over ordered keyword groups; the committee
        // proposal is the catch-all.
        let proposal = if contains_any(&text, &["internet", "wifi"]) {
            connectivity_proposal()
        } else if contains_any(&text, &["teaching", "fast", "pace"]) {
            pacing_proposal()
        } else if contains_any(&text, &["explanation", "understand"]) {
            comprehension_proposal()
        } else if contains_any(&text, &["facilities", "broken", "ac", "hot"]) {
            facilities_proposal()
        } else if contains_any(&text, &["food", "canteen", "mess"]) {
            catering_proposal()
        } else if contains_any(&text, &["trees", "environment", "playground"]) {
            environment_proposal()
        } else {
            committee_proposal()
        };

        vec![proposal]
    }

    fn name(&self) -> &str {
        "local"
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn resources(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn connectivity_proposal() -> SolutionProposal {
    SolutionProposal {
        title: "Upgrade the campus Wi-Fi infrastructure with high-density access points in study areas.".to_string(),
        steps: vec![
            "Survey dead zones across hostels and study areas".to_string(),
            "Install high-density access points at the worst spots".to_string(),
            "Load-test the network during peak evening hours".to_string(),
        ],
        resources: resources(&[
            ("Access points", "Enterprise Wi-Fi access points"),
            ("Controller", "Central network controller"),
        ]),
        estimated_cost: "High ($10,000+)".to_string(),
        sentiment: Some(Sentiment::Negative),
    }
}

fn pacing_proposal() -> SolutionProposal {
    SolutionProposal {
        title: "Implement a 'pause-and-ask' policy during lectures and provide recorded sessions for review.".to_string(),
        steps: vec![
            "Agree a pause-and-ask checkpoint every 20 minutes".to_string(),
            "Record lectures and publish them within a day".to_string(),
        ],
        resources: resources(&[(
            "Recording software",
            "Lecture capture tooling (e.g. Panopto, OBS)",
        )]),
        estimated_cost: "Low (Time investment)".to_string(),
        sentiment: Some(Sentiment::Neutral),
    }
}

fn comprehension_proposal() -> SolutionProposal {
    SolutionProposal {
        title: "Organize supplementary tutorial sessions and peer-led study groups for complex topics.".to_string(),
        steps: vec![
            "Identify the topics students flag most often".to_string(),
            "Schedule weekly tutorials with trained peer mentors".to_string(),
        ],
        resources: resources(&[("Rooms", "Classroom booking system")]),
        estimated_cost: "Medium ($500 - $2000 for tutor stipends)".to_string(),
        sentiment: Some(Sentiment::Neutral),
    }
}

fn facilities_proposal() -> SolutionProposal {
    SolutionProposal {
        title: "Dispatch facilities team for immediate repair and schedule preventive maintenance checks.".to_string(),
        steps: vec![
            "Raise repair tickets for every reported fault".to_string(),
            "Add the affected equipment to a preventive maintenance rota".to_string(),
        ],
        resources: resources(&[("Ticketing", "Maintenance request system")]),
        estimated_cost: "Medium ($1000+ for repairs)".to_string(),
        sentiment: Some(Sentiment::Negative),
    }
}

fn catering_proposal() -> SolutionProposal {
    SolutionProposal {
        title: "Review canteen vendor standards and introduce a rotating menu with student taste panels.".to_string(),
        steps: vec![
            "Audit current vendor hygiene and quality compliance".to_string(),
            "Pilot a rotating menu voted on by a student taste panel".to_string(),
        ],
        resources: resources(&[("Survey tool", "Menu feedback forms")]),
        estimated_cost: "Medium ($500+ per term)".to_string(),
        sentiment: Some(Sentiment::Negative),
    }
}

fn environment_proposal() -> SolutionProposal {
    SolutionProposal {
        title: "Allocate budget for green space development and outdoor student recreational areas.".to_string(),
        steps: vec![
            "Identify plots suitable for planting and seating".to_string(),
            "Phase the landscaping work over one semester".to_string(),
        ],
        resources: resources(&[
            ("Landscaping", "Landscaping tools and saplings"),
            ("Furniture", "Outdoor benches and tables"),
        ]),
        estimated_cost: "High ($5000+)".to_string(),
        sentiment: Some(Sentiment::Positive),
    }
}

fn committee_proposal() -> SolutionProposal {
    SolutionProposal {
        title: "Initiate a student-faculty joint committee to investigate and address these specific concerns.".to_string(),
        steps: vec![
            "Nominate student and faculty representatives".to_string(),
            "Review the raw feedback and agree concrete follow-ups".to_string(),
        ],
        resources: resources(&[
            ("Meeting room", "Recurring committee slot"),
            ("Survey tool", "Follow-up questionnaires"),
        ]),
        estimated_cost: "Low".to_string(),
        sentiment: Some(Sentiment::Neutral),
    }
}
