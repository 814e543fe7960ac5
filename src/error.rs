use thiserror::Error;

/// Errors surfaced by the top-level comparison entry point.
///
/// The correction passes and the fragment assembler are total over
/// well-formed input; only the orchestrator raises these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// Cooperative cancellation was observed mid-computation.
    #[error("comparison was cancelled")]
    Cancelled,

    /// The reconstruction law or a length invariant was violated by a
    /// correction pass or by the sequence aligner. This indicates a logic
    /// defect, not bad input; the whole computation is aborted rather than
    /// returning a partially-correct tree.
    #[error("internal consistency violation: {0}")]
    InternalConsistency(String),
}
