//! Seam traits between the pipeline core and its collaborators.

mod generator;
mod store;

pub use generator::InsightGenerator;
pub use store::FeedbackStore;
