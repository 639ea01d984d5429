//! # pulse-storage
//!
//! [`FeedbackStore`] implementations. `JsonFileStore` persists a single
//! JSON document on disk; `MemoryStore` keeps everything in-process and is
//! the natural spy target for pipeline tests. Relational and document-store
//! backends live outside this workspace; the pipeline only ever sees the
//! trait.
//!
//! [`FeedbackStore`]: pulse_core::traits::FeedbackStore

pub mod json_store;
pub mod memory_store;

pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
