/// Token-equality sensitivity used during word-level and character-level
/// alignment. The line-level skeleton always compares whitespace-insensitively
/// regardless of the caller's policy, to avoid line-level churn from pure
/// re-indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonPolicy {
    /// Token contents must match byte-for-byte.
    #[default]
    Exact,
    /// Token contents are trimmed before comparison.
    TrimWhitespace,
    /// All whitespace inside token contents is ignored.
    IgnoreWhitespace,
}

impl ComparisonPolicy {
    /// Equality of token *content* under this policy. Content is the token
    /// text without its whitespace prefix; the prefix still travels with the
    /// token for exact reconstruction.
    pub fn content_equals(&self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::TrimWhitespace => a.trim() == b.trim(),
            Self::IgnoreWhitespace => non_whitespace(a).eq(non_whitespace(b)),
        }
    }
}

fn non_whitespace(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| !c.is_whitespace())
}
