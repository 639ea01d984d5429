//! # pulse-generation
//!
//! [`InsightGenerator`] backends. The local backend is deterministic and
//! dependency-free; the remote backend calls a text-completion service over
//! HTTP. Both honor the same contract: failures never escape the generator,
//! they become documented sentinel values.

pub mod local;
pub mod parse;
pub mod remote;

pub use local::LocalGenerator;
pub use remote::RemoteGenerator;

use pulse_core::config::GenerationConfig;
use pulse_core::traits::InsightGenerator;
use tracing::info;

/// Build a generator from configuration: remote when an endpoint is
/// configured, local otherwise. Selection happens once at process start;
/// the orchestrator receives the boxed trait object and never branches on
/// backend identity.
pub fn generator_from_config(config: &GenerationConfig) -> Box<dyn InsightGenerator> {
    match &config.endpoint {
        Some(endpoint) => {
            info!(endpoint = %endpoint, model = %config.model, "using remote generation backend");
            Box::new(RemoteGenerator::new(config.clone()))
        }
        None => {
            info!("no generation endpoint configured, using local backend");
            Box::new(LocalGenerator::new())
        }
    }
}

/// [`generator_from_config`] over environment-resolved configuration.
pub fn generator_from_env() -> Box<dyn InsightGenerator> {
    generator_from_config(&GenerationConfig::from_env())
}
