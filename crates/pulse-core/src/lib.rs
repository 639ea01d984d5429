//! # pulse-core
//!
//! Foundation crate for the Pulse feedback-insight pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PulseConfig;
pub use errors::{PulseError, PulseResult};
pub use models::{
    Cluster, FeedbackItem, FeedbackSubmission, Insight, RunOutcome, RunRecord, Sentiment,
    SolutionProposal,
};
pub use traits::{FeedbackStore, InsightGenerator};
