/// Clustering-stage errors.
///
/// The engine catches these internally and degrades to a single fallback
/// cluster; they never abort a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("feature extraction failed: {reason}")]
    VectorizationFailed { reason: String },

    #[error("partitioning failed: {reason}")]
    PartitioningFailed { reason: String },
}
