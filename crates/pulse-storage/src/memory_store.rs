//! In-process store for tests and offline runs.

use std::sync::Mutex;

use pulse_core::errors::{PulseResult, StoreError};
use pulse_core::models::{FeedbackItem, FeedbackSubmission, Insight, RunRecord};
use pulse_core::traits::FeedbackStore;

#[derive(Debug, Default)]
struct State {
    feedback: Vec<FeedbackItem>,
    runs: Vec<RunRecord>,
}

/// Mutex-guarded in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, State>, StoreError> {
        self.state.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Number of persisted run records (test introspection).
    pub fn run_count(&self) -> usize {
        self.state.lock().map(|s| s.runs.len()).unwrap_or(0)
    }
}

impl FeedbackStore for MemoryStore {
    fn add_feedback(&self, submission: FeedbackSubmission) -> PulseResult<FeedbackItem> {
        let item = FeedbackItem::from_submission(submission);
        self.lock()?.feedback.push(item.clone());
        Ok(item)
    }

    fn unprocessed_feedback(&self, selector: Option<&str>) -> PulseResult<Vec<FeedbackItem>> {
        let state = self.lock()?;
        Ok(state
            .feedback
            .iter()
            .filter(|f| !f.processed && f.matches_selector(selector))
            .cloned()
            .collect())
    }

    fn mark_processed(&self, ids: &[String]) -> PulseResult<()> {
        let mut state = self.lock()?;
        for item in state.feedback.iter_mut() {
            if ids.contains(&item.id) {
                item.processed = true;
            }
        }
        Ok(())
    }

    fn save_run(&self, insights: &[Insight], selector: Option<&str>) -> PulseResult<()> {
        self.lock()?
            .runs
            .push(RunRecord::new(insights.to_vec(), selector));
        Ok(())
    }

    fn latest_run(&self, selector: Option<&str>) -> PulseResult<Option<RunRecord>> {
        let state = self.lock()?;
        Ok(state
            .runs
            .iter()
            .rev()
            .find(|r| match selector {
                None => true,
                Some(key) => r.selector.as_deref() == Some(key),
            })
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(text: &str, selector: Option<&str>) -> FeedbackSubmission {
        FeedbackSubmission {
            text: text.to_string(),
            category: "General".to_string(),
            selector: selector.map(str::to_string),
            role: None,
            session: None,
        }
    }

    #[test]
    fn add_then_fetch_unprocessed() {
        let store = MemoryStore::new();
        store.add_feedback(submission("wifi is slow", None)).unwrap();
        store.add_feedback(submission("food is cold", None)).unwrap();
        assert_eq!(store.unprocessed_feedback(None).unwrap().len(), 2);
    }

    #[test]
    fn mark_processed_is_idempotent() {
        let store = MemoryStore::new();
        let item = store.add_feedback(submission("wifi", None)).unwrap();

        store.mark_processed(&[item.id.clone()]).unwrap();
        assert!(store.unprocessed_feedback(None).unwrap().is_empty());

        // Marking again, plus an unknown id, is a no-op rather than an error.
        store
            .mark_processed(&[item.id, "missing-id".to_string()])
            .unwrap();
        assert!(store.unprocessed_feedback(None).unwrap().is_empty());
    }

    #[test]
    fn selector_filters_fetch() {
        let store = MemoryStore::new();
        store
            .add_feedback(submission("a", Some("campus-a")))
            .unwrap();
        store
            .add_feedback(submission("b", Some("campus-b")))
            .unwrap();
        store.add_feedback(submission("c", None)).unwrap();

        assert_eq!(store.unprocessed_feedback(None).unwrap().len(), 3);
        assert_eq!(
            store.unprocessed_feedback(Some("campus-a")).unwrap().len(),
            1
        );
    }

    #[test]
    fn latest_run_is_most_recent_for_selector() {
        let store = MemoryStore::new();
        store.save_run(&[], Some("campus-a")).unwrap();
        store.save_run(&[], Some("campus-b")).unwrap();

        let latest = store.latest_run(Some("campus-a")).unwrap().unwrap();
        assert_eq!(latest.selector.as_deref(), Some("campus-a"));

        let any = store.latest_run(None).unwrap().unwrap();
        assert_eq!(any.selector.as_deref(), Some("campus-b"));
    }

    #[test]
    fn no_runs_yields_none() {
        let store = MemoryStore::new();
        assert!(store.latest_run(None).unwrap().is_none());
    }
}
