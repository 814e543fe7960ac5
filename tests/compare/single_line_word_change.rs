use crate::common::{assert_structural_laws, fragment_types, line_fragment_types};
use pretty_assertions::assert_eq;
use rstest::rstest;
use strata::{CancellationToken, ComparisonPolicy, EditType, compare};

#[rstest]
fn changed_word_is_refined_down_to_characters() -> Result<(), strata::DiffError> {
    let text1 = "foo bar\n";
    let text2 = "foo baz\n";

    let fragments = compare(
        text1,
        text2,
        ComparisonPolicy::Exact,
        &CancellationToken::new(),
    )?;

    assert_structural_laws(&fragments, text1, text2);
    assert_eq!(
        line_fragment_types(&fragments),
        vec![Some(EditType::Changed)]
    );

    let line = &fragments[0];
    assert_eq!(line.range_left(), 0..8);
    assert_eq!(line.range_right(), 0..8);
    assert_eq!(line.line_count_left(), 1);
    assert_eq!(line.line_count_right(), 1);

    // word level: the shared "foo" and the trailing terminator are context,
    // the changed word carries its whitespace prefix
    let words = line.children();
    assert_eq!(
        fragment_types(words),
        vec![None, Some(EditType::Changed), None]
    );
    assert_eq!(words[0].text_left(text1), "foo");
    assert_eq!(words[1].text_left(text1), " bar");
    assert_eq!(words[1].text_right(text2), " baz");
    assert_eq!(words[2].text_left(text1), "\n");

    // char level: only the final character differs
    let chars = words[1].children();
    assert_eq!(
        fragment_types(chars),
        vec![None, None, None, Some(EditType::Changed)]
    );
    assert_eq!(chars[3].text_left(text1), "r");
    assert_eq!(chars[3].text_right(text2), "z");
    assert_eq!(chars[3].range_left(), 6..7);
    assert_eq!(chars[3].range_right(), 6..7);
    assert!(chars[3].children().is_empty());

    Ok(())
}

#[rstest]
fn changed_words_on_both_sides_of_context_are_refined_separately()
-> Result<(), strata::DiffError> {
    let text1 = "alpha keep beta\n";
    let text2 = "gamma keep delta\n";

    let fragments = compare(
        text1,
        text2,
        ComparisonPolicy::Exact,
        &CancellationToken::new(),
    )?;

    assert_structural_laws(&fragments, text1, text2);
    assert_eq!(
        line_fragment_types(&fragments),
        vec![Some(EditType::Changed)]
    );

    let words = fragments[0].children();
    assert_eq!(
        fragment_types(words),
        vec![
            Some(EditType::Changed),
            None,
            Some(EditType::Changed),
            None,
        ]
    );
    assert_eq!(words[0].text_left(text1), "alpha");
    assert_eq!(words[0].text_right(text2), "gamma");
    assert_eq!(words[2].text_left(text1), " beta");
    assert_eq!(words[2].text_right(text2), " delta");
    assert!(!words[0].children().is_empty());
    assert!(!words[2].children().is_empty());

    Ok(())
}
