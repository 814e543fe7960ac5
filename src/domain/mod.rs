//! Value types shared across the comparison pipeline:
//!
//! - `edit`: atomic edits produced by the sequence aligner
//! - `fragment`: the output tree nodes (`Fragment`, `LineFragment`)
//! - `policy`: token-equality sensitivity (`ComparisonPolicy`)
//! - `word`: ephemeral word tokens produced by the tokenizer

pub mod edit;
pub mod fragment;
pub mod policy;
pub mod word;
