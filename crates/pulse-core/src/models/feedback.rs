use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A new feedback submission, before the store assigns identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    /// Free-text feedback body.
    pub text: String,
    /// Submitter-chosen category (e.g. "Academics", "Facilities").
    pub category: String,
    /// Opaque partition key restricting which runs see this item.
    #[serde(default)]
    pub selector: Option<String>,
    /// Submitter role; anonymous when absent.
    #[serde(default)]
    pub role: Option<String>,
    /// Logical session the feedback was collected in.
    #[serde(default)]
    pub session: Option<String>,
}

/// A stored feedback item. Immutable once created except for the
/// `processed` flag, which the pipeline flips after a successful run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackItem {
    /// UUID v4 identifier, assigned by the store.
    pub id: String,
    /// Original, unmodified feedback text. This is what reaches the
    /// generator and the insight samples; normalization is vectorizer-only.
    pub text: String,
    /// Submitter-chosen category.
    pub category: String,
    /// Opaque partition key; `None` means visible to unfiltered runs only
    /// in the sense that a selector-filtered run skips it.
    #[serde(default)]
    pub selector: Option<String>,
    /// Submitter role.
    #[serde(default = "default_role")]
    pub role: String,
    /// Collection session.
    #[serde(default = "default_session")]
    pub session: String,
    /// When this item was submitted.
    pub submitted_at: DateTime<Utc>,
    /// Whether a pipeline run has already consumed this item.
    #[serde(default)]
    pub processed: bool,
}

fn default_role() -> String {
    "Anonymous".to_string()
}

fn default_session() -> String {
    "Default Session".to_string()
}

impl FeedbackItem {
    /// Materialize a submission into a stored item with fresh identity.
    pub fn from_submission(submission: FeedbackSubmission) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: submission.text,
            category: submission.category,
            selector: submission.selector,
            role: submission.role.unwrap_or_else(default_role),
            session: submission.session.unwrap_or_else(default_session),
            submitted_at: Utc::now(),
            processed: false,
        }
    }

    /// Whether this item is visible to a run filtered by `selector`.
    /// An absent filter means "all items".
    pub fn matches_selector(&self, selector: Option<&str>) -> bool {
        match selector {
            None => true,
            Some(key) => self.selector.as_deref() == Some(key),
        }
    }
}
