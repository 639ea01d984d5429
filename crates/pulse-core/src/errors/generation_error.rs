/// Generation-backend errors.
///
/// Used internally by the remote backend; the [`InsightGenerator`] contract
/// converts every one of these into a sentinel output value before returning,
/// so callers of the trait never see them.
///
/// [`InsightGenerator`]: crate::traits::InsightGenerator
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("malformed generation response: {reason}")]
    MalformedResponse { reason: String },
}
