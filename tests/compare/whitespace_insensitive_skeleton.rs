use crate::common::{assert_structural_laws, line_fragment_types};
use pretty_assertions::assert_eq;
use rstest::rstest;
use strata::{CancellationToken, ComparisonPolicy, compare};

#[rstest]
#[case::ignore_whitespace(ComparisonPolicy::IgnoreWhitespace)]
// the line skeleton is whitespace-insensitive regardless of caller policy
#[case::exact(ComparisonPolicy::Exact)]
fn reindented_line_is_context_at_line_level(
    #[case] policy: ComparisonPolicy,
) -> Result<(), strata::DiffError> {
    let text1 = "a  b\n";
    let text2 = "a b\n";

    let fragments = compare(text1, text2, policy, &CancellationToken::new())?;

    assert_structural_laws(&fragments, text1, text2);
    assert_eq!(line_fragment_types(&fragments), vec![None]);

    assert_eq!(fragments[0].range_left(), 0..5);
    assert_eq!(fragments[0].range_right(), 0..4);
    assert!(fragments[0].children().is_empty());

    Ok(())
}

#[rstest]
fn reindented_block_keeps_line_accounting_aligned() -> Result<(), strata::DiffError> {
    let text1 = "fn main() {\n    call();\n}\n";
    let text2 = "fn main() {\n  call();\n}\n";

    let fragments = compare(
        text1,
        text2,
        ComparisonPolicy::IgnoreWhitespace,
        &CancellationToken::new(),
    )?;

    assert_structural_laws(&fragments, text1, text2);
    assert_eq!(line_fragment_types(&fragments), vec![None, None, None]);
    assert_eq!(fragments[1].line_count_left(), 1);
    assert_eq!(fragments[1].line_count_right(), 1);

    Ok(())
}
