//! Hierarchical text comparison.
//!
//! Given two text blocks, [`compare`] produces a tree of difference regions
//! at three granularities: whole-line blocks, word runs within changed
//! lines, and characters within changed words. Every fragment carries a
//! difference classification (inserted / deleted / changed / unchanged) and
//! exact byte/line ranges on both sides, and concatenating one side's
//! ranges in order reproduces that side's input byte-for-byte at every
//! nesting depth.
//!
//! ```
//! use strata::{CancellationToken, ComparisonPolicy, compare};
//!
//! let fragments = compare(
//!     "a\nb\n",
//!     "a\nx\nb\n",
//!     ComparisonPolicy::Exact,
//!     &CancellationToken::new(),
//! )?;
//!
//! assert_eq!(fragments.len(), 3);
//! # Ok::<(), strata::DiffError>(())
//! ```
//!
//! The crate is a pure in-process library: no I/O, no encoding detection,
//! no rendering. Comparisons hold no shared mutable state, so independent
//! calls may run concurrently without coordination.

pub mod cancellation;
pub mod domain;
pub mod engine;
pub mod error;

pub use cancellation::CancellationToken;
pub use domain::edit::{AtomicEdit, EditType};
pub use domain::fragment::{Fragment, LineFragment};
pub use domain::policy::ComparisonPolicy;
pub use domain::word::Word;
pub use engine::align::{AlignToken, MyersAligner, SequenceAligner};
pub use engine::correct::CorrectionPass;
pub use engine::orchestrate::DiffOrchestrator;
pub use engine::tokenize::{split_chars, split_lines, split_words};
pub use error::DiffError;

/// Compares two texts and returns the top-level line fragments, with word
/// and character refinements attached to changed blocks.
///
/// `policy` applies to the word-level and character-level stages; the line
/// skeleton always compares whitespace-insensitively.
pub fn compare(
    text1: &str,
    text2: &str,
    policy: ComparisonPolicy,
    cancellation: &CancellationToken,
) -> Result<Vec<LineFragment>, DiffError> {
    DiffOrchestrator::new(policy, cancellation.clone()).compare(text1, text2)
}

/// Like [`compare`], with absent inputs normalized to the empty string.
/// Diffing against empty text is well-defined: the entire other side becomes
/// one inserted or deleted fragment.
pub fn compare_optional(
    text1: Option<&str>,
    text2: Option<&str>,
    policy: ComparisonPolicy,
    cancellation: &CancellationToken,
) -> Result<Vec<LineFragment>, DiffError> {
    compare(
        text1.unwrap_or_default(),
        text2.unwrap_or_default(),
        policy,
        cancellation,
    )
}
