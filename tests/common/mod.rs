#![allow(dead_code)]

use std::ops::Range;
use strata::{EditType, Fragment, LineFragment};

/// Checks every structural law over a comparison result:
///
/// - reconstruction: concatenating one side's ranges in order reproduces
///   that side's input, at every nesting depth
/// - type partition: `Insert` has an empty left range, `Delete` an empty
///   right range, `Changed` and context fragments cover both sides
/// - leaf rule: only two-sided `Changed` fragments carry children, and
///   character-level `Changed` fragments are the refinement floor: they
///   stay leaves
/// - adjacency: no two consecutive fragments share a non-context type,
///   except across a line boundary where word fragments are deliberately
///   split
pub fn assert_structural_laws(fragments: &[LineFragment], text1: &str, text2: &str) {
    let left: String = fragments.iter().map(|f| f.text_left(text1)).collect();
    let right: String = fragments.iter().map(|f| f.text_right(text2)).collect();
    pretty_assertions::assert_eq!(left, text1, "left reconstruction");
    pretty_assertions::assert_eq!(right, text2, "right reconstruction");

    for pair in fragments.windows(2) {
        assert_distinct_types(
            pair[0].edit_type(),
            pair[1].edit_type(),
            pair[0].text_left(text1),
            pair[0].text_right(text2),
        );
    }

    for fragment in fragments {
        assert_type_partition(
            fragment.edit_type(),
            fragment.range_left(),
            fragment.range_right(),
        );
        assert_line_counts(fragment, text1, text2);
        if fragment.edit_type() == Some(EditType::Changed) {
            assert!(
                !fragment.children().is_empty(),
                "changed line blocks must carry word children"
            );
            assert_child_laws(
                fragment.children(),
                text1,
                text2,
                fragment.range_left(),
                fragment.range_right(),
            );
        } else {
            assert!(
                fragment.children().is_empty(),
                "non-changed fragments must be leaves"
            );
        }
    }
}

fn assert_child_laws(
    children: &[Fragment],
    text1: &str,
    text2: &str,
    range_left: Range<usize>,
    range_right: Range<usize>,
) {
    let left: String = children.iter().map(|f| f.text_left(text1)).collect();
    let right: String = children.iter().map(|f| f.text_right(text2)).collect();
    pretty_assertions::assert_eq!(left, &text1[range_left], "child left reconstruction");
    pretty_assertions::assert_eq!(right, &text2[range_right], "child right reconstruction");

    for pair in children.windows(2) {
        assert_distinct_types(
            pair[0].edit_type(),
            pair[1].edit_type(),
            pair[0].text_left(text1),
            pair[0].text_right(text2),
        );
    }

    for child in children {
        assert_type_partition(child.edit_type(), child.range_left(), child.range_right());
        if child.edit_type() == Some(EditType::Changed) {
            // character fragments are the refinement floor: a changed word
            // recurses into character children, a changed character is a leaf
            if !child.children().is_empty() {
                assert_child_laws(
                    child.children(),
                    text1,
                    text2,
                    child.range_left(),
                    child.range_right(),
                );
            }
        } else {
            assert!(
                child.children().is_empty(),
                "non-changed fragments must be leaves"
            );
        }
    }
}

fn assert_type_partition(
    edit_type: Option<EditType>,
    range_left: Range<usize>,
    range_right: Range<usize>,
) {
    match edit_type {
        Some(EditType::Insert) => {
            assert!(range_left.is_empty(), "insert must not cover the left side");
            assert!(!range_right.is_empty(), "insert must cover the right side");
        }
        Some(EditType::Delete) => {
            assert!(!range_left.is_empty(), "delete must cover the left side");
            assert!(
                range_right.is_empty(),
                "delete must not cover the right side"
            );
        }
        Some(EditType::Changed) | None => {
            assert!(!range_left.is_empty(), "two-sided fragment with empty left");
            assert!(
                !range_right.is_empty(),
                "two-sided fragment with empty right"
            );
        }
        Some(EditType::Equal) => panic!("assembled fragments encode equality as None"),
    }
}

/// Word fragments are split so none straddles two physical lines, which can
/// legitimately leave two same-type fragments adjacent across a terminator.
fn assert_distinct_types(
    first: Option<EditType>,
    second: Option<EditType>,
    first_left: &str,
    first_right: &str,
) {
    if first.is_none() || first != second {
        return;
    }
    let at_line_break = (first_left.is_empty() || first_left.ends_with('\n'))
        && (first_right.is_empty() || first_right.ends_with('\n'));
    assert!(
        at_line_break,
        "adjacent fragments of type {first:?} away from a line boundary"
    );
}

fn assert_line_counts(fragment: &LineFragment, text1: &str, text2: &str) {
    pretty_assertions::assert_eq!(
        fragment.line_count_left(),
        count_lines(fragment.text_left(text1)),
        "left line count"
    );
    pretty_assertions::assert_eq!(
        fragment.line_count_right(),
        count_lines(fragment.text_right(text2)),
        "right line count"
    );
}

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

/// The edit types of a fragment sequence, for compact assertions.
pub fn line_fragment_types(fragments: &[LineFragment]) -> Vec<Option<EditType>> {
    fragments.iter().map(LineFragment::edit_type).collect()
}

pub fn fragment_types(fragments: &[Fragment]) -> Vec<Option<EditType>> {
    fragments.iter().map(Fragment::edit_type).collect()
}
