use crate::models::SolutionProposal;

/// Backend that turns a cluster's texts into a problem statement and
/// structured solution proposals.
///
/// Implementations absorb their own failures: neither operation returns a
/// `Result`. A failing backend yields documented sentinel values (see
/// [`crate::constants`]) so the orchestrator always receives usable,
/// well-shaped output. Retries, if any, are the caller's concern; no
/// implementation retries internally.
pub trait InsightGenerator: Send + Sync {
    /// Derive a problem statement from the raw feedback texts of one
    /// cluster. The input is neither mutated nor reordered.
    fn generate_problem_statement(&self, texts: &[String]) -> String;

    /// Propose solutions for a free-text problem statement. Never returns
    /// an empty vec; on failure a single sentinel proposal is returned.
    fn suggest_solutions(&self, problem_statement: &str) -> Vec<SolutionProposal>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}
