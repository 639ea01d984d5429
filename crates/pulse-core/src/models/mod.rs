//! Data model for the analysis pipeline.

mod cluster;
mod feedback;
mod insight;
mod run;

pub use cluster::Cluster;
pub use feedback::{FeedbackItem, FeedbackSubmission};
pub use insight::{Insight, Sentiment, SolutionProposal};
pub use run::{RunOutcome, RunRecord};
