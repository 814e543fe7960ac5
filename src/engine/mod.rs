//! The comparison pipeline, leaf-first:
//!
//! - `tokenize`: splits text into lines, words and characters
//! - `align`: minimal-edit-distance sequence alignment (Myers' algorithm)
//! - `correct`: rewriting passes that repair boundary artifacts in a raw
//!   edit script
//! - `assemble`: turns a corrected edit script into typed fragments with
//!   exact offset/line bookkeeping
//! - `orchestrate`: runs the line → word → char recursion
//!
//! Data flows strictly downward: raw text → tokens → edit script →
//! corrected edit script → fragment tree. Every step is a pure function of
//! its inputs and the selected comparison policy.

pub mod align;
pub mod assemble;
pub mod correct;
pub mod orchestrate;
pub mod tokenize;
