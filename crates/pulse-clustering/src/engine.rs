//! ClusteringEngine: batch partitioning with graceful degradation.
//!
//! Degradation policy, evaluated in order:
//! 1. empty input → no clusters;
//! 2. fewer items than `target_k` → one "General Feedback" cluster;
//! 3. vectorizer unavailable → one "Ungrouped Feedback" cluster;
//! 4. extraction/partitioning failure → one "General" cluster, logged.
//!
//! The three fallback labels are distinct on purpose: operators can tell
//! from a run's output which degradation mode fired.

use std::collections::BTreeMap;

use pulse_core::config::ClusteringConfig;
use pulse_core::constants::{
    THEME_CLUSTERING_FAILED, THEME_ENGINE_UNAVAILABLE, THEME_TOO_FEW_ITEMS,
};
use pulse_core::errors::ClusteringError;
use pulse_core::models::{Cluster, FeedbackItem};
use tracing::{debug, warn};

use crate::kmeans;
use crate::normalize::normalize;
use crate::vectorize::TfIdfVectorizer;

/// Groups a batch of feedback items into thematic clusters.
///
/// The vectorizer capability is checked once at construction; callers can
/// inspect it via [`ClusteringEngine::vectorizer_available`] instead of
/// probing mid-run.
pub struct ClusteringEngine {
    vectorizer: Option<TfIdfVectorizer>,
    config: ClusteringConfig,
}

impl Default for ClusteringEngine {
    fn default() -> Self {
        Self::new(ClusteringConfig::default())
    }
}

impl ClusteringEngine {
    /// A vocabulary cap of zero disables vector clustering, leaving only
    /// the single-cluster fallback path.
    pub fn new(config: ClusteringConfig) -> Self {
        let vectorizer = if config.max_vocabulary_terms > 0 {
            Some(TfIdfVectorizer::new(config.max_vocabulary_terms))
        } else {
            None
        };
        Self { vectorizer, config }
    }

    /// Whether the vector clustering path is available.
    pub fn vectorizer_available(&self) -> bool {
        self.vectorizer.is_some()
    }

    /// Configured upper bound on clusters per run.
    pub fn max_clusters(&self) -> usize {
        self.config.max_clusters
    }

    /// Partition `items` into at most `target_k` clusters.
    ///
    /// Always returns a partition of the input: every item appears in
    /// exactly one cluster, in input order within its cluster. `target_k`
    /// of zero is treated as one. Never fails; every failure mode degrades
    /// to a single fallback cluster with a mode-specific theme.
    pub fn cluster(&self, items: &[FeedbackItem], target_k: usize) -> Vec<Cluster> {
        if items.is_empty() {
            return Vec::new();
        }
        let target_k = target_k.max(1);

        if items.len() < target_k {
            return vec![fallback_cluster(items, THEME_TOO_FEW_ITEMS)];
        }

        let Some(vectorizer) = &self.vectorizer else {
            debug!("vectorizer disabled, returning single fallback cluster");
            return vec![fallback_cluster(items, THEME_ENGINE_UNAVAILABLE)];
        };

        match self.vector_cluster(vectorizer, items, target_k) {
            Ok(clusters) => clusters,
            Err(e) => {
                warn!(error = %e, "clustering failed, degrading to fallback cluster");
                vec![fallback_cluster(items, THEME_CLUSTERING_FAILED)]
            }
        }
    }

    fn vector_cluster(
        &self,
        vectorizer: &TfIdfVectorizer,
        items: &[FeedbackItem],
        target_k: usize,
    ) -> Result<Vec<Cluster>, ClusteringError> {
        let documents: Vec<String> = items.iter().map(|i| normalize(&i.text)).collect();
        let vectors = vectorizer.fit_transform(&documents)?;
        let labels = kmeans::partition(
            &vectors,
            target_k,
            self.config.kmeans_seed,
            self.config.kmeans_max_iterations,
        )?;

        // Group by label; BTreeMap keeps output order stable across runs.
        let mut groups: BTreeMap<usize, Vec<FeedbackItem>> = BTreeMap::new();
        for (item, &label) in items.iter().zip(&labels) {
            groups.entry(label).or_default().push(item.clone());
        }

        let clusters = groups
            .into_values()
            .enumerate()
            .map(|(ordinal, members)| Cluster {
                cluster_id: ordinal,
                theme: format!("Cluster {}", ordinal + 1),
                items: members,
            })
            .collect();
        Ok(clusters)
    }
}

fn fallback_cluster(items: &[FeedbackItem], theme: &str) -> Cluster {
    Cluster {
        cluster_id: 0,
        theme: theme.to_string(),
        items: items.to_vec(),
    }
}
