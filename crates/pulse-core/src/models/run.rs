use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::insight::Insight;

/// Persisted output of one pipeline run. Append-only: a new record is
/// written per run and prior records are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// UUID v4 identifier.
    pub id: String,
    /// When the run completed.
    pub created_at: DateTime<Utc>,
    /// Insights sorted by item_count descending.
    pub insights: Vec<Insight>,
    /// Partition key the run was filtered by, if any.
    #[serde(default)]
    pub selector: Option<String>,
}

impl RunRecord {
    pub fn new(insights: Vec<Insight>, selector: Option<&str>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            insights,
            selector: selector.map(str::to_string),
        }
    }
}

/// Result of one orchestrator invocation. `NoData` is a successful no-op,
/// distinct from an error.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", content = "insights", rename_all = "snake_case")]
pub enum RunOutcome {
    /// No unprocessed feedback was found; nothing was written.
    NoData,
    /// The run completed; carries the sorted insight list.
    Completed(Vec<Insight>),
}

impl RunOutcome {
    pub fn is_no_data(&self) -> bool {
        matches!(self, RunOutcome::NoData)
    }

    /// The insights produced by this run, empty for `NoData`.
    pub fn insights(&self) -> &[Insight] {
        match self {
            RunOutcome::NoData => &[],
            RunOutcome::Completed(insights) => insights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_serializes_with_status_tag() {
        let value = serde_json::to_value(RunOutcome::NoData).unwrap();
        assert_eq!(value["status"], "no_data");
    }

    #[test]
    fn completed_carries_insights() {
        let outcome = RunOutcome::Completed(vec![]);
        assert!(!outcome.is_no_data());
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "completed");
    }
}
