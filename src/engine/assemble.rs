//! Fragment assembly: a single linear walk over a corrected edit script.
//!
//! The walk carries explicit cursor state (byte offsets, and line counters
//! for the line-level variant) threaded through pure functions. All merge
//! heuristics live in the correction passes; the assembler only spans and
//! classifies. It also verifies every edit's payload against the source
//! slice under the cursor, which is where the reconstruction law is
//! enforced: a mismatch means a defective aligner or correction pass and
//! aborts the computation.

use crate::domain::edit::{AtomicEdit, EditType};
use crate::domain::fragment::{Fragment, LineFragment};
use crate::error::DiffError;
use derive_new::new;

/// Accumulator state for an assembly walk. Offsets are absolute byte
/// positions in the original texts; sub-level walks start at the enclosing
/// range's start so child ranges index the original texts directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct Cursor {
    pub offset_left: usize,
    pub offset_right: usize,
    pub line_left: u32,
    pub line_right: u32,
}

/// Assembles word-level or character-level fragments; byte cursors only.
pub fn assemble_fragments(
    edits: &[AtomicEdit],
    left: &str,
    right: &str,
    mut cursor: Cursor,
) -> Result<(Vec<Fragment>, Cursor), DiffError> {
    let mut fragments = Vec::with_capacity(edits.len());

    for edit in edits {
        let range_left = cursor.offset_left..cursor.offset_left + edit.left_len();
        let range_right = cursor.offset_right..cursor.offset_right + edit.right_len();
        verify_payload(edit, left, right, &cursor)?;

        fragments.push(Fragment::new(
            fragment_type(edit),
            range_left.clone(),
            range_right.clone(),
        ));

        cursor.offset_left = range_left.end;
        cursor.offset_right = range_right.end;
    }

    Ok((fragments, cursor))
}

/// Assembles top-level line fragments; byte cursors plus line counters.
pub fn assemble_line_fragments(
    edits: &[AtomicEdit],
    left: &str,
    right: &str,
    mut cursor: Cursor,
) -> Result<(Vec<LineFragment>, Cursor), DiffError> {
    let mut fragments = Vec::with_capacity(edits.len());

    for edit in edits {
        let range_left = cursor.offset_left..cursor.offset_left + edit.left_len();
        let range_right = cursor.offset_right..cursor.offset_right + edit.right_len();
        verify_payload(edit, left, right, &cursor)?;

        let lines_left = edit.left().map_or(0, count_lines);
        let lines_right = edit.right().map_or(0, count_lines);

        fragments.push(LineFragment::new(
            fragment_type(edit),
            range_left.clone(),
            range_right.clone(),
            cursor.line_left,
            lines_left,
            cursor.line_right,
            lines_right,
        ));

        cursor.offset_left = range_left.end;
        cursor.offset_right = range_right.end;
        cursor.line_left += lines_left;
        cursor.line_right += lines_right;
    }

    Ok((fragments, cursor))
}

/// `Equal` edits become context fragments (`None`); everything else keeps
/// its derived type.
fn fragment_type(edit: &AtomicEdit) -> Option<EditType> {
    match edit.edit_type() {
        EditType::Equal => None,
        edit_type => Some(edit_type),
    }
}

/// An edit contributes `terminator_count` lines if its text ends with a
/// terminator, one more if the text is non-empty and does not, and zero if
/// it is empty.
fn count_lines(text: &str) -> u32 {
    let terminators = text.matches('\n').count() as u32;
    if text.is_empty() {
        0
    } else if text.ends_with('\n') {
        terminators
    } else {
        terminators + 1
    }
}

fn verify_payload(
    edit: &AtomicEdit,
    left: &str,
    right: &str,
    cursor: &Cursor,
) -> Result<(), DiffError> {
    verify_side(edit.left(), left, cursor.offset_left, "left")?;
    verify_side(edit.right(), right, cursor.offset_right, "right")
}

fn verify_side(
    payload: Option<&str>,
    source: &str,
    offset: usize,
    side: &str,
) -> Result<(), DiffError> {
    let Some(payload) = payload else {
        return Ok(());
    };
    match source.get(offset..offset + payload.len()) {
        Some(slice) if slice == payload => Ok(()),
        _ => Err(DiffError::InternalConsistency(format!(
            "edit payload diverged from the {side} source at byte {offset}: expected {payload:?}"
        ))),
    }
}
