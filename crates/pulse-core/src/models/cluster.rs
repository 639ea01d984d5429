use serde::{Deserialize, Serialize};

use super::feedback::FeedbackItem;

/// A thematic grouping of feedback items, produced fresh for one pipeline
/// run. The full set of clusters for a run partitions the input batch:
/// every item belongs to exactly one cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    /// Zero-based id assigned in engine output order.
    pub cluster_id: usize,
    /// Placeholder label ("Cluster N" or a fallback theme). Not guaranteed
    /// unique or semantically derived from content.
    pub theme: String,
    /// Member items, in input order.
    pub items: Vec<FeedbackItem>,
}

impl Cluster {
    /// The raw (unnormalized) texts of the member items, in order.
    pub fn texts(&self) -> Vec<String> {
        self.items.iter().map(|i| i.text.clone()).collect()
    }
}
