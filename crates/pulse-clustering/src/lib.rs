//! # pulse-clustering
//!
//! Turns a batch of feedback items into thematically grouped clusters.
//!
//! The pipeline is: normalize → TF-IDF vectorize (capped vocabulary,
//! stopword-filtered) → seeded k-means. Every failure mode degrades to a
//! single fallback cluster with a mode-specific theme label so that a run
//! always gets a usable partition of its input.

pub mod engine;
pub mod kmeans;
pub mod normalize;
pub mod vectorize;

pub use engine::ClusteringEngine;
pub use normalize::normalize;
