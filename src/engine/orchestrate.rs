//! Top-level orchestration of the three comparison granularities.
//!
//! The recursion is a small state machine: line level → word level for each
//! changed line block → character level for each changed word run. One-sided
//! and context fragments are terminal; only `Changed` fragments recurse.
//!
//! The line skeleton is always aligned whitespace-insensitively so pure
//! re-indentation does not churn whole lines; the caller's policy applies
//! from the word level down. Cancellation is polled once on entry and at the
//! start of each changed block's refinement; a cancelled comparison
//! propagates [`DiffError::Cancelled`] without returning a partial tree.

use crate::cancellation::CancellationToken;
use crate::domain::edit::{AtomicEdit, EditType};
use crate::domain::fragment::{Fragment, LineFragment};
use crate::domain::policy::ComparisonPolicy;
use crate::engine::align::{MyersAligner, SequenceAligner};
use crate::engine::assemble::{Cursor, assemble_fragments, assemble_line_fragments};
use crate::engine::correct::{CHAR_PASSES, CorrectionPass, WORD_PASSES, run_pipeline};
use crate::engine::tokenize::{split_chars, split_lines, split_words};
use crate::error::DiffError;
use derive_new::new;
use std::ops::Range;
use tracing::debug;

/// Runs the full hierarchical comparison for one pair of texts.
///
/// Holds no state across calls; each comparison is a pure function of the
/// inputs, the policy and the cancellation token.
#[derive(Debug, Clone, new)]
pub struct DiffOrchestrator {
    policy: ComparisonPolicy,
    cancellation: CancellationToken,
}

impl DiffOrchestrator {
    pub fn compare(&self, text1: &str, text2: &str) -> Result<Vec<LineFragment>, DiffError> {
        self.cancellation.check()?;
        debug!(
            left_len = text1.len(),
            right_len = text2.len(),
            policy = ?self.policy,
            "comparing texts"
        );

        let lines1 = split_lines(text1);
        let lines2 = split_lines(text2);
        let edits = MyersAligner::new().align(&lines1, &lines2, ComparisonPolicy::IgnoreWhitespace);
        let edits = CorrectionPass::UniteSameType.apply(edits);

        let (mut fragments, cursor) =
            assemble_line_fragments(&edits, text1, text2, Cursor::default())?;
        verify_consumed(&cursor, text1.len(), text2.len())?;

        for fragment in &mut fragments {
            if fragment.edit_type() != Some(EditType::Changed) {
                continue;
            }
            self.cancellation.check()?;
            let children = self.refine_changed_block(
                text1,
                text2,
                fragment.range_left(),
                fragment.range_right(),
            )?;
            fragment.set_children(children);
        }

        Ok(fragments)
    }

    /// Word-level refinement of one changed line block.
    fn refine_changed_block(
        &self,
        text1: &str,
        text2: &str,
        range_left: Range<usize>,
        range_right: Range<usize>,
    ) -> Result<Vec<Fragment>, DiffError> {
        let block_left = &text1[range_left.clone()];
        let block_right = &text2[range_right.clone()];

        let words1 = split_words(block_left);
        let words2 = split_words(block_right);
        let edits = MyersAligner::new().align(&words1, &words2, self.policy);
        let edits = run_pipeline(edits, &WORD_PASSES);
        // no word fragment may straddle two physical lines; PreferWholeLines
        // has already moved the boundaries onto real line starts
        let edits = split_at_terminators(edits);

        let cursor = Cursor::new(range_left.start, range_right.start, 0, 0);
        let (mut fragments, cursor) = assemble_fragments(&edits, text1, text2, cursor)?;
        verify_consumed(&cursor, range_left.end, range_right.end)?;

        for fragment in &mut fragments {
            if fragment.edit_type() != Some(EditType::Changed) {
                continue;
            }
            let children = self.refine_changed_words(
                text1,
                text2,
                fragment.range_left(),
                fragment.range_right(),
            )?;
            fragment.set_children(children);
        }

        Ok(fragments)
    }

    /// Character-level refinement of one changed word run; produces leaves.
    fn refine_changed_words(
        &self,
        text1: &str,
        text2: &str,
        range_left: Range<usize>,
        range_right: Range<usize>,
    ) -> Result<Vec<Fragment>, DiffError> {
        let run_left = &text1[range_left.clone()];
        let run_right = &text2[range_right.clone()];

        let chars1 = split_chars(run_left);
        let chars2 = split_chars(run_right);
        let edits = MyersAligner::new().align(&chars1, &chars2, self.policy);
        let edits = run_pipeline(edits, &CHAR_PASSES);

        let cursor = Cursor::new(range_left.start, range_right.start, 0, 0);
        let (fragments, cursor) = assemble_fragments(&edits, text1, text2, cursor)?;
        verify_consumed(&cursor, range_left.end, range_right.end)?;

        Ok(fragments)
    }
}

fn verify_consumed(cursor: &Cursor, end_left: usize, end_right: usize) -> Result<(), DiffError> {
    if cursor.offset_left == end_left && cursor.offset_right == end_right {
        Ok(())
    } else {
        Err(DiffError::InternalConsistency(format!(
            "edit script consumed {}/{} bytes, expected {}/{}",
            cursor.offset_left, cursor.offset_right, end_left, end_right
        )))
    }
}

/// Splits edits at line terminators so that no fragment assembled from them
/// straddles two physical lines. One-sided edits split after each
/// terminator; two-sided edits split by pairing per-side terminator-delimited
/// pieces in order, with any surplus pieces joined into the final edit.
fn split_at_terminators(edits: Vec<AtomicEdit>) -> Vec<AtomicEdit> {
    let mut split = Vec::with_capacity(edits.len());

    for edit in edits {
        let straddles = edit.left().is_some_and(|text| text.contains('\n'))
            || edit.right().is_some_and(|text| text.contains('\n'));
        if !straddles {
            split.push(edit);
            continue;
        }

        match (edit.left(), edit.right()) {
            (Some(left), None) => {
                for piece in split_lines(left) {
                    split.push(AtomicEdit::deleted(piece));
                }
            }
            (None, Some(right)) => {
                for piece in split_lines(right) {
                    split.push(AtomicEdit::inserted(piece));
                }
            }
            (Some(left), Some(right)) => {
                let pieces_left = split_lines(left);
                let pieces_right = split_lines(right);
                let pairs = pieces_left.len().min(pieces_right.len());
                if pairs == 0 {
                    split.push(AtomicEdit::from_sides(
                        Some(left.to_string()),
                        Some(right.to_string()),
                        edit.modified(),
                    ));
                    continue;
                }
                for i in 0..pairs - 1 {
                    split.push(AtomicEdit::from_sides(
                        Some(pieces_left[i].to_string()),
                        Some(pieces_right[i].to_string()),
                        edit.modified(),
                    ));
                }
                split.push(AtomicEdit::from_sides(
                    Some(pieces_left[pairs - 1..].concat()),
                    Some(pieces_right[pairs - 1..].concat()),
                    edit.modified(),
                ));
            }
            (None, None) => unreachable!("edit with no sides"),
        }
    }

    split
}
