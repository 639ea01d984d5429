use crate::errors::PulseResult;
use crate::models::{FeedbackItem, FeedbackSubmission, Insight, RunRecord};

/// Persistence collaborator for feedback items and run records.
///
/// The store owns its own consistency; the pipeline only reads items,
/// appends run records, and flips processed flags.
pub trait FeedbackStore: Send + Sync {
    /// Persist a new submission, assigning identity and timestamps.
    fn add_feedback(&self, submission: FeedbackSubmission) -> PulseResult<FeedbackItem>;

    /// All items not yet consumed by a run, optionally restricted to one
    /// partition. An absent selector means "all".
    fn unprocessed_feedback(&self, selector: Option<&str>) -> PulseResult<Vec<FeedbackItem>>;

    /// Flag the given items as processed, in one logical operation.
    /// Idempotent: already-processed or unknown ids are a no-op.
    fn mark_processed(&self, ids: &[String]) -> PulseResult<()>;

    /// Append the output of one run as a new record. Never mutates a
    /// prior run's record.
    fn save_run(&self, insights: &[Insight], selector: Option<&str>) -> PulseResult<()>;

    /// The most recent run record for the given partition, if any.
    fn latest_run(&self, selector: Option<&str>) -> PulseResult<Option<RunRecord>>;
}
