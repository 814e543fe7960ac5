use crate::common::{assert_structural_laws, line_fragment_types};
use pretty_assertions::assert_eq;
use rstest::rstest;
use strata::{CancellationToken, ComparisonPolicy, EditType, compare, compare_optional};

#[rstest]
fn empty_left_side_becomes_one_insert_fragment() -> Result<(), strata::DiffError> {
    let text1 = "";
    let text2 = "a\nb\n";

    let fragments = compare(
        text1,
        text2,
        ComparisonPolicy::Exact,
        &CancellationToken::new(),
    )?;

    assert_structural_laws(&fragments, text1, text2);
    assert_eq!(line_fragment_types(&fragments), vec![Some(EditType::Insert)]);
    assert_eq!(fragments[0].range_left(), 0..0);
    assert_eq!(fragments[0].range_right(), 0..4);
    assert_eq!(fragments[0].line_count_left(), 0);
    assert_eq!(fragments[0].line_count_right(), 2);

    Ok(())
}

#[rstest]
fn empty_right_side_becomes_one_delete_fragment() -> Result<(), strata::DiffError> {
    let text1 = "a\nb";
    let text2 = "";

    let fragments = compare(
        text1,
        text2,
        ComparisonPolicy::Exact,
        &CancellationToken::new(),
    )?;

    assert_structural_laws(&fragments, text1, text2);
    assert_eq!(line_fragment_types(&fragments), vec![Some(EditType::Delete)]);
    assert_eq!(fragments[0].line_count_left(), 2);
    assert_eq!(fragments[0].line_count_right(), 0);

    Ok(())
}

#[rstest]
fn two_empty_inputs_produce_no_fragments() -> Result<(), strata::DiffError> {
    let fragments = compare(
        "",
        "",
        ComparisonPolicy::Exact,
        &CancellationToken::new(),
    )?;

    assert_eq!(fragments, vec![]);

    Ok(())
}

#[rstest]
fn absent_inputs_are_normalized_to_empty_text() -> Result<(), strata::DiffError> {
    let fragments = compare_optional(
        None,
        Some("x\n"),
        ComparisonPolicy::Exact,
        &CancellationToken::new(),
    )?;

    assert_eq!(line_fragment_types(&fragments), vec![Some(EditType::Insert)]);

    let fragments = compare_optional(
        None,
        None,
        ComparisonPolicy::Exact,
        &CancellationToken::new(),
    )?;

    assert_eq!(fragments, vec![]);

    Ok(())
}
