use std::ops::Range;

/// Ephemeral tokenizer output for word-level alignment; never retained in
/// the final fragment tree.
///
/// Inter-word whitespace is attached as the prefix of the following word
/// rather than kept as a separate token, so alignment compares bare word
/// contents while the prefix remains available for exact reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    text: &'a str,
    prefixed: &'a str,
    range: Range<usize>,
    prefix_len: u32,
    at_line_boundary: bool,
}

impl<'a> Word<'a> {
    pub(crate) fn new(
        text: &'a str,
        prefixed: &'a str,
        range: Range<usize>,
        prefix_len: u32,
        at_line_boundary: bool,
    ) -> Self {
        Self {
            text,
            prefixed,
            range,
            prefix_len,
            at_line_boundary,
        }
    }

    /// The word proper, without its whitespace prefix.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The exact byte contribution of this token: prefix plus word.
    pub fn prefixed_text(&self) -> &'a str {
        self.prefixed
    }

    /// Byte range of the word proper within the tokenized text.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn prefix_len(&self) -> u32 {
        self.prefix_len
    }

    /// True when the word starts right after a line terminator, sits
    /// immediately before one, or touches the start or end of the text.
    pub fn at_line_boundary(&self) -> bool {
        self.at_line_boundary
    }
}
