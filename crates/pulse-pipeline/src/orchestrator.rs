//! PipelineOrchestrator: one linear run with no branching recovery.

use pulse_core::config::PulseConfig;
use pulse_core::constants::MAX_SAMPLE_TEXTS;
use pulse_core::errors::PulseResult;
use pulse_core::models::{Insight, RunOutcome};
use pulse_core::traits::{FeedbackStore, InsightGenerator};
use tracing::{debug, info};

use pulse_clustering::ClusteringEngine;

/// Runs the fetch → cluster → generate → persist → mark-processed sequence.
///
/// Holds an injected generator and clustering engine; the store arrives per
/// call so one orchestrator can serve several partitions. Callers must
/// serialize concurrent runs per selector themselves — two runs racing the
/// same unprocessed query can double-consume items.
pub struct PipelineOrchestrator {
    engine: ClusteringEngine,
    generator: Box<dyn InsightGenerator>,
}

impl PipelineOrchestrator {
    pub fn new(engine: ClusteringEngine, generator: Box<dyn InsightGenerator>) -> Self {
        Self { engine, generator }
    }

    /// Default clustering config plus environment-selected generator.
    pub fn from_env() -> Self {
        let config = PulseConfig::from_env();
        Self {
            engine: ClusteringEngine::new(config.clustering),
            generator: pulse_generation::generator_from_config(&config.generation),
        }
    }

    /// Execute one run against `store`, optionally restricted to one
    /// partition.
    ///
    /// Store failures propagate and abort the run with nothing persisted
    /// and nothing marked processed, so a retry re-consumes the same
    /// batch (at-least-once at run level). A degraded clustering result is
    /// still a successful run. Note the save/mark gap: a crash between
    /// `save_run` and `mark_processed` duplicates items into the next
    /// run's insights; the two writes are deliberately not transactional
    /// here.
    pub fn run(&self, store: &dyn FeedbackStore, selector: Option<&str>) -> PulseResult<RunOutcome> {
        info!(selector = selector.unwrap_or("all"), "pipeline: fetching feedback");
        let items = store.unprocessed_feedback(selector)?;
        if items.is_empty() {
            info!("pipeline: no new feedback to process");
            return Ok(RunOutcome::NoData);
        }

        info!(count = items.len(), "pipeline: processing batch");
        let target_k = items.len().min(self.engine.max_clusters());
        let clusters = self.engine.cluster(&items, target_k);

        let mut insights: Vec<Insight> = Vec::with_capacity(clusters.len());
        for cluster in &clusters {
            debug!(
                cluster_id = cluster.cluster_id,
                theme = %cluster.theme,
                items = cluster.items.len(),
                "pipeline: analyzing cluster"
            );
            let texts = cluster.texts();
            let problem_statement = self.generator.generate_problem_statement(&texts);
            let solutions = self.generator.suggest_solutions(&problem_statement);
            insights.push(Insight {
                theme: cluster.theme.clone(),
                item_count: cluster.items.len(),
                problem_statement,
                solutions,
                sample_texts: texts.into_iter().take(MAX_SAMPLE_TEXTS).collect(),
            });
        }

        // Largest clusters first; stable sort keeps engine order on ties.
        insights.sort_by_key(|i| std::cmp::Reverse(i.item_count));

        info!(insights = insights.len(), "pipeline: saving results");
        store.save_run(&insights, selector)?;

        let ids: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
        store.mark_processed(&ids)?;

        info!("pipeline: done");
        Ok(RunOutcome::Completed(insights))
    }
}
