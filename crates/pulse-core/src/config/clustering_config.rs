use serde::{Deserialize, Serialize};

use crate::constants;

/// Clustering engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// TF-IDF vocabulary cap. Zero disables vector clustering entirely,
    /// which forces the engine's single-cluster fallback.
    pub max_vocabulary_terms: usize,
    /// Upper bound on clusters per run.
    pub max_clusters: usize,
    /// Fixed k-means seed for reproducible assignment.
    pub kmeans_seed: u64,
    /// k-means iteration cap.
    pub kmeans_max_iterations: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            max_vocabulary_terms: constants::MAX_VOCABULARY_TERMS,
            max_clusters: constants::MAX_CLUSTERS_PER_RUN,
            kmeans_seed: constants::KMEANS_SEED,
            kmeans_max_iterations: constants::KMEANS_MAX_ITERATIONS,
        }
    }
}
