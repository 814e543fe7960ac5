//! Correction passes over raw edit scripts.
//!
//! The aligner only knows token sequences; it cannot know that an insert
//! followed by a delete is really a replacement, that a lone one-sided edit
//! belongs to the change next to it, or that a shifted line terminator makes
//! a block look like it starts one character short of a line boundary. These
//! passes repair those artifacts.
//!
//! Every pass is a total `Vec<AtomicEdit> -> Vec<AtomicEdit>` function and
//! preserves the concatenated text of both sides. The orchestrator owns the
//! sequencing; `UniteSameType` must run again after the other passes because
//! folding and shifting can re-expose same-type adjacency.

use crate::domain::edit::{AtomicEdit, EditType};
use tracing::trace;

/// The closed set of correction passes, applied in orchestrator-chosen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionPass {
    /// Merge runs of the same one-sided or changed type, drop zero-length
    /// two-sided markers, and fuse insert/delete adjacency into `Changed`.
    UniteSameType,
    /// Fold a one-sided edit adjacent to a `Changed` edit into that edit.
    ConnectSingleSideToChange,
    /// Rotate a misattributed leading line terminator out of a one-sided
    /// edit so its boundaries land on real line starts.
    PreferWholeLines,
}

impl CorrectionPass {
    pub fn apply(self, edits: Vec<AtomicEdit>) -> Vec<AtomicEdit> {
        match self {
            Self::UniteSameType => unite_same_type(edits),
            Self::ConnectSingleSideToChange => connect_single_side_to_change(edits),
            Self::PreferWholeLines => prefer_whole_lines(edits),
        }
    }
}

/// Pipeline for word-level scripts inside a changed line block.
pub const WORD_PASSES: [CorrectionPass; 4] = [
    CorrectionPass::UniteSameType,
    CorrectionPass::ConnectSingleSideToChange,
    CorrectionPass::PreferWholeLines,
    CorrectionPass::UniteSameType,
];

/// Pipeline for character-level scripts. `PreferWholeLines` is pointless at
/// this granularity since nothing recurses below characters.
pub const CHAR_PASSES: [CorrectionPass; 2] = [
    CorrectionPass::UniteSameType,
    CorrectionPass::ConnectSingleSideToChange,
];

pub fn run_pipeline(mut edits: Vec<AtomicEdit>, passes: &[CorrectionPass]) -> Vec<AtomicEdit> {
    for pass in passes {
        trace!(?pass, edits = edits.len(), "applying correction pass");
        edits = pass.apply(edits);
    }
    edits
}

/// The named two-step merge: converting opposite one-sided runs into
/// `Changed` can expose new same-type adjacency, so the merge runs again.
fn unite_same_type(edits: Vec<AtomicEdit>) -> Vec<AtomicEdit> {
    let edits = merge_adjacent(edits);
    let edits = convert_opposite_sides(edits);
    merge_adjacent(edits)
}

/// Merges consecutive edits of the same `Insert`/`Delete`/`Changed` type and
/// drops zero-length two-sided markers. `Equal` runs are left per-token so
/// unchanged regions keep their per-line (or per-word) granularity.
fn merge_adjacent(edits: Vec<AtomicEdit>) -> Vec<AtomicEdit> {
    let mut merged: Vec<AtomicEdit> = Vec::with_capacity(edits.len());

    for edit in edits {
        if edit.is_zero_length() {
            continue;
        }
        match merged.pop() {
            Some(prev) if same_mergeable_type(&prev, &edit) => merged.push(fuse(prev, edit)),
            Some(prev) => {
                merged.push(prev);
                merged.push(edit);
            }
            None => merged.push(edit),
        }
    }

    merged
}

fn same_mergeable_type(a: &AtomicEdit, b: &AtomicEdit) -> bool {
    a.edit_type() == b.edit_type() && a.edit_type() != EditType::Equal
}

/// An insert immediately followed by a delete (or vice versa) is
/// semantically a replacement: fuse the pair into one `Changed` edit.
fn convert_opposite_sides(edits: Vec<AtomicEdit>) -> Vec<AtomicEdit> {
    let mut converted: Vec<AtomicEdit> = Vec::with_capacity(edits.len());

    for edit in edits {
        match converted.pop() {
            Some(prev) if opposite_sides(&prev, &edit) => {
                converted.push(fuse_as_changed(prev, edit));
            }
            Some(prev) => {
                converted.push(prev);
                converted.push(edit);
            }
            None => converted.push(edit),
        }
    }

    converted
}

fn opposite_sides(a: &AtomicEdit, b: &AtomicEdit) -> bool {
    a.is_one_sided() && b.is_one_sided() && a.edit_type() != b.edit_type()
}

/// Folds one-sided edits into an adjacent two-sided `Changed` edit. A lone
/// one-character insert rendered next to the change it belongs to reads as
/// two separate edits; fused, it reads as one. A one-sided edit between two
/// changes is folded into the earlier one.
fn connect_single_side_to_change(edits: Vec<AtomicEdit>) -> Vec<AtomicEdit> {
    let mut connected: Vec<AtomicEdit> = Vec::with_capacity(edits.len());

    for edit in edits {
        match connected.pop() {
            Some(prev)
                if (prev.edit_type() == EditType::Changed && edit.is_one_sided())
                    || (prev.is_one_sided() && edit.edit_type() == EditType::Changed) =>
            {
                connected.push(fuse_as_changed(prev, edit));
            }
            Some(prev) => {
                connected.push(prev);
                connected.push(edit);
            }
            None => connected.push(edit),
        }
    }

    connected
}

/// Repairs a boundary artifact on a 3-edit window: a one-sided edit whose
/// text starts with a line terminator, wedged between two-sided neighbors
/// where the next edit starts with a terminator on both sides. The
/// terminator rotates out: appended to the previous edit on both sides,
/// stripped from the next edit on both sides, and the one-sided edit turns
/// `"\nX"` into `"X\n"`. Total text per side is unchanged.
///
/// Never fires on the first or last edit of the script; there is no
/// neighbor to shift into.
fn prefer_whole_lines(mut edits: Vec<AtomicEdit>) -> Vec<AtomicEdit> {
    if edits.len() < 3 {
        return edits;
    }

    for i in 1..edits.len() - 1 {
        if !edits[i].is_one_sided() {
            continue;
        }
        let starts_with_terminator = edits[i]
            .left()
            .or(edits[i].right())
            .is_some_and(|text| text.starts_with('\n'));
        if !starts_with_terminator {
            continue;
        }
        if edits[i - 1].is_one_sided() || !strippable(&edits[i + 1]) {
            continue;
        }

        edits[i - 1] = append_terminator(&edits[i - 1]);
        edits[i] = rotate_terminator(&edits[i]);
        edits[i + 1] = strip_terminator(&edits[i + 1]);
    }

    edits
}

/// The next edit can give up its leading terminator only if both sides start
/// with one and neither side degenerates into an empty-on-one-side edit.
fn strippable(edit: &AtomicEdit) -> bool {
    match (edit.left(), edit.right()) {
        (Some(left), Some(right)) => {
            left.starts_with('\n')
                && right.starts_with('\n')
                && ((left.len() > 1 && right.len() > 1) || (left == "\n" && right == "\n"))
        }
        _ => false,
    }
}

fn append_terminator(edit: &AtomicEdit) -> AtomicEdit {
    AtomicEdit::from_sides(
        edit.left().map(|text| format!("{text}\n")),
        edit.right().map(|text| format!("{text}\n")),
        edit.modified(),
    )
}

fn strip_terminator(edit: &AtomicEdit) -> AtomicEdit {
    AtomicEdit::from_sides(
        edit.left().map(|text| text[1..].to_string()),
        edit.right().map(|text| text[1..].to_string()),
        edit.modified(),
    )
}

fn rotate_terminator(edit: &AtomicEdit) -> AtomicEdit {
    AtomicEdit::from_sides(
        edit.left().map(|text| format!("{}\n", &text[1..])),
        edit.right().map(|text| format!("{}\n", &text[1..])),
        edit.modified(),
    )
}

/// Same-type merge: concatenates the present sides in order.
fn fuse(first: AtomicEdit, second: AtomicEdit) -> AtomicEdit {
    let modified = first.modified() || second.modified();
    let (left_a, right_a) = first.into_sides();
    let (left_b, right_b) = second.into_sides();
    AtomicEdit::from_sides(join(left_a, left_b), join(right_a, right_b), modified)
}

/// Fuses two edits into a single `Changed` edit, keeping per-side order.
fn fuse_as_changed(first: AtomicEdit, second: AtomicEdit) -> AtomicEdit {
    let (left_a, right_a) = first.into_sides();
    let (left_b, right_b) = second.into_sides();
    AtomicEdit::from_sides(join(left_a, left_b), join(right_a, right_b), true)
}

fn join(a: Option<String>, b: Option<String>) -> Option<String> {
    match (a, b) {
        (None, None) => None,
        (a, b) => {
            let mut joined = a.unwrap_or_default();
            joined.push_str(&b.unwrap_or_default());
            Some(joined)
        }
    }
}
