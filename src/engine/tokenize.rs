//! Text tokenizers for the three comparison granularities.
//!
//! All tokenizers return slices of their input; joining each token's exact
//! byte contribution (`prefixed_text` for words, the slice itself otherwise)
//! in order reproduces the input, which the reconstruction law depends on.

use crate::domain::word::Word;

/// Splits on `\n`, keeping the terminator attached to its line. The final
/// slice may lack a terminator. Empty input yields no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;

    for (idx, _) in text.match_indices('\n') {
        lines.push(&text[start..=idx]);
        start = idx + 1;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Scans left to right for maximal runs of non-whitespace characters.
///
/// Whitespace between words becomes the prefix of the following word.
/// Trailing whitespace with no word after it is carried by a final
/// empty-text word so the token sequence still covers the whole input.
pub fn split_words(text: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut iter = text.char_indices().peekable();

    loop {
        let prefix_start = match iter.peek() {
            Some((idx, _)) => *idx,
            None => break,
        };
        while iter.peek().is_some_and(|(_, c)| c.is_whitespace()) {
            iter.next();
        }
        let word_start = iter.peek().map_or(text.len(), |(idx, _)| *idx);
        while iter.peek().is_some_and(|(_, c)| !c.is_whitespace()) {
            iter.next();
        }
        let word_end = iter.peek().map_or(text.len(), |(idx, _)| *idx);

        words.push(Word::new(
            &text[word_start..word_end],
            &text[prefix_start..word_end],
            word_start..word_end,
            (word_start - prefix_start) as u32,
            at_line_boundary(text, word_start, word_end),
        ));

        // an empty word means the scan consumed trailing whitespace
        if word_start == word_end {
            break;
        }
    }

    words
}

fn at_line_boundary(text: &str, word_start: usize, word_end: usize) -> bool {
    word_start == 0
        || word_end == text.len()
        || text[..word_start].ends_with('\n')
        || text[word_end..].starts_with('\n')
}

/// One token per character; the finest granularity, never recursed further.
pub fn split_chars(text: &str) -> Vec<&str> {
    let mut chars = Vec::with_capacity(text.len());
    let mut iter = text.char_indices().peekable();

    while let Some((start, _)) = iter.next() {
        let end = iter.peek().map_or(text.len(), |(idx, _)| *idx);
        chars.push(&text[start..end]);
    }

    chars
}
