//! # pulse-pipeline
//!
//! Sequences one analysis run: fetch unprocessed feedback → cluster →
//! generate insights → persist → mark processed. Linear and synchronous,
//! with all-or-nothing persistence.

pub mod orchestrator;

pub use orchestrator::PipelineOrchestrator;
