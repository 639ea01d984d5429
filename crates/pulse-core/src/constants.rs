/// Pulse system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed seed for k-means centroid initialization. Cluster assignment must be
/// reproducible given identical input, so this is never randomized.
pub const KMEANS_SEED: u64 = 42;

/// Upper bound on k-means refinement iterations.
pub const KMEANS_MAX_ITERATIONS: usize = 100;

/// Vocabulary cap for the TF-IDF vectorizer (most informative terms kept).
pub const MAX_VOCABULARY_TERMS: usize = 1000;

/// Upper bound on clusters per pipeline run; the effective k is
/// `min(MAX_CLUSTERS_PER_RUN, item count)`.
pub const MAX_CLUSTERS_PER_RUN: usize = 3;

/// Number of raw source texts retained on each insight.
pub const MAX_SAMPLE_TEXTS: usize = 3;

// Fallback cluster themes. The three labels are deliberately distinct so that
// operators (and tests) can tell the degradation modes apart.

/// Theme when there are too few items to cluster meaningfully.
pub const THEME_TOO_FEW_ITEMS: &str = "General Feedback";

/// Theme when the vectorizer capability is disabled or unavailable.
pub const THEME_ENGINE_UNAVAILABLE: &str = "Ungrouped Feedback";

/// Theme when feature extraction or partitioning failed at runtime.
pub const THEME_CLUSTERING_FAILED: &str = "General";

// Sentinel values emitted by generation backends in place of errors. The
// generator contract never propagates failures to the orchestrator.

/// Problem statement returned when the remote backend call fails.
pub const SENTINEL_PROBLEM_STATEMENT: &str = "Error generating problem statement.";

/// Title of the sentinel solution proposal returned on generation failure.
pub const SENTINEL_SOLUTION_TITLE: &str = "Error generating solutions.";

/// Cost string used when the real cost is unknown.
pub const UNKNOWN_COST: &str = "Unknown";
