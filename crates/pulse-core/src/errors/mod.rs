//! Error taxonomy for the Pulse workspace.
//!
//! Per-domain enums wrapped by the top-level [`PulseError`]. Clustering and
//! generation errors are normally absorbed by their owning components
//! (degraded cluster / sentinel output); store and config errors propagate.

mod clustering_error;
mod config_error;
mod generation_error;
mod store_error;

pub use clustering_error::ClusteringError;
pub use config_error::ConfigError;
pub use generation_error::GenerationError;
pub use store_error::StoreError;

/// Top-level error type for the Pulse workspace.
#[derive(Debug, thiserror::Error)]
pub enum PulseError {
    #[error(transparent)]
    Clustering(#[from] ClusteringError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Workspace-wide result alias.
pub type PulseResult<T> = Result<T, PulseError>;
