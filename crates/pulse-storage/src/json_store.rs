//! Flat-file JSON store.
//!
//! The whole dataset lives in one JSON document, read-modify-written per
//! operation. Suits the prototype scale this targets; anything bigger
//! should implement [`FeedbackStore`] over a real database.
//!
//! [`FeedbackStore`]: pulse_core::traits::FeedbackStore

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use pulse_core::errors::{PulseResult, StoreError};
use pulse_core::models::{FeedbackItem, FeedbackSubmission, Insight, RunRecord};
use pulse_core::traits::FeedbackStore;

/// On-disk document layout. Unknown fields from newer writers are dropped
/// on rewrite; both sections default so older files keep loading.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Document {
    feedback: Vec<FeedbackItem>,
    runs: Vec<RunRecord>,
}

/// Single-file JSON-backed store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open a store at `path`, creating parent directories and seeding an
    /// empty document if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };
        if let Some(parent) = store.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        if !store.path.exists() {
            store.write_document(&Document::default())?;
            debug!(path = %store.path.display(), "seeded empty store document");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Document, StoreError> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_document(&self, document: &Document) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(document)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl FeedbackStore for JsonFileStore {
    fn add_feedback(&self, submission: FeedbackSubmission) -> PulseResult<FeedbackItem> {
        let mut document = self.read_document()?;
        let item = FeedbackItem::from_submission(submission);
        document.feedback.push(item.clone());
        self.write_document(&document)?;
        Ok(item)
    }

    fn unprocessed_feedback(&self, selector: Option<&str>) -> PulseResult<Vec<FeedbackItem>> {
        let document = self.read_document()?;
        Ok(document
            .feedback
            .into_iter()
            .filter(|f| !f.processed && f.matches_selector(selector))
            .collect())
    }

    fn mark_processed(&self, ids: &[String]) -> PulseResult<()> {
        let mut document = self.read_document()?;
        for item in document.feedback.iter_mut() {
            if ids.contains(&item.id) {
                item.processed = true;
            }
        }
        self.write_document(&document)?;
        Ok(())
    }

    fn save_run(&self, insights: &[Insight], selector: Option<&str>) -> PulseResult<()> {
        let mut document = self.read_document()?;
        document.runs.push(RunRecord::new(insights.to_vec(), selector));
        self.write_document(&document)?;
        Ok(())
    }

    fn latest_run(&self, selector: Option<&str>) -> PulseResult<Option<RunRecord>> {
        let document = self.read_document()?;
        Ok(document
            .runs
            .into_iter()
            .rev()
            .find(|r| match selector {
                None => true,
                Some(key) => r.selector.as_deref() == Some(key),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(text: &str) -> FeedbackSubmission {
        FeedbackSubmission {
            text: text.to_string(),
            category: "General".to_string(),
            selector: None,
            role: None,
            session: None,
        }
    }

    #[test]
    fn open_seeds_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("local_db.json");
        let store = JsonFileStore::open(&path).unwrap();
        assert!(path.exists());
        assert!(store.unprocessed_feedback(None).unwrap().is_empty());
        assert!(store.latest_run(None).unwrap().is_none());
    }

    #[test]
    fn feedback_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        {
            let store = JsonFileStore::open(&path).unwrap();
            store.add_feedback(submission("wifi is slow")).unwrap();
        }
        let reopened = JsonFileStore::open(&path).unwrap();
        let items = reopened.unprocessed_feedback(None).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].text, "wifi is slow");
    }

    #[test]
    fn mark_processed_persists_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("db.json")).unwrap();
        let item = store.add_feedback(submission("wifi")).unwrap();

        store.mark_processed(&[item.id.clone()]).unwrap();
        store.mark_processed(&[item.id]).unwrap();
        assert!(store.unprocessed_feedback(None).unwrap().is_empty());
    }

    #[test]
    fn runs_append_without_mutating_prior_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("db.json")).unwrap();

        store.save_run(&[], None).unwrap();
        let first = store.latest_run(None).unwrap().unwrap();
        store.save_run(&[], None).unwrap();
        let second = store.latest_run(None).unwrap().unwrap();

        assert_ne!(first.id, second.id);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(document["runs"].as_array().unwrap().len(), 2);
        assert_eq!(document["runs"][0]["id"], first.id);
    }

    #[test]
    fn loads_legacy_solution_shape_from_disk() {
        // A historical run record written by an older backend version.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.json");
        std::fs::write(
            &path,
            r#"{
                "feedback": [],
                "runs": [{
                    "id": "run-1",
                    "created_at": "2025-06-01T12:00:00Z",
                    "insights": [{
                        "theme": "Cluster 1",
                        "item_count": 2,
                        "problem_statement": "Slow wifi",
                        "solutions": [{
                            "solution": "Upgrade access points",
                            "estimated_cost": "High",
                            "required_tools": "APs"
                        }],
                        "sample_texts": ["wifi is slow"]
                    }]
                }]
            }"#,
        )
        .unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        let run = store.latest_run(None).unwrap().unwrap();
        let solution = &run.insights[0].solutions[0];
        assert_eq!(solution.title, "Upgrade access points");
        assert!(solution.sentiment.is_none());
    }
}
