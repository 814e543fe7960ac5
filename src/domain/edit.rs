//! Atomic edits, the primitive unit exchanged between the sequence aligner,
//! the correction pipeline and the fragment assembler.

/// Classification of an [`AtomicEdit`], derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditType {
    /// Only the right side carries text.
    Insert,
    /// Only the left side carries text.
    Delete,
    /// Both sides carry text and they differ under the comparison policy.
    Changed,
    /// Both sides carry text and they match under the comparison policy.
    /// The texts may still differ byte-wise (e.g. whitespace-insensitive
    /// matches).
    Equal,
}

/// The smallest unit emitted by the sequence aligner: a pair of optional
/// text spans with a modified flag.
///
/// At least one side is always present. Edits are immutable value types;
/// correction passes replace them wholesale instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicEdit {
    left: Option<String>,
    right: Option<String>,
    modified: bool,
}

impl AtomicEdit {
    pub fn inserted(right: impl Into<String>) -> Self {
        Self {
            left: None,
            right: Some(right.into()),
            modified: false,
        }
    }

    pub fn deleted(left: impl Into<String>) -> Self {
        Self {
            left: Some(left.into()),
            right: None,
            modified: false,
        }
    }

    pub fn changed(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: Some(left.into()),
            right: Some(right.into()),
            modified: true,
        }
    }

    pub fn unchanged(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: Some(left.into()),
            right: Some(right.into()),
            modified: false,
        }
    }

    /// Rebuilds an edit from raw sides. Callers must uphold the at-least-one-
    /// side invariant; all in-crate call sites do so by construction.
    pub(crate) fn from_sides(
        left: Option<String>,
        right: Option<String>,
        modified: bool,
    ) -> Self {
        let modified = modified && left.is_some() && right.is_some();
        Self {
            left,
            right,
            modified,
        }
    }

    pub fn left(&self) -> Option<&str> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&str> {
        self.right.as_deref()
    }

    pub fn modified(&self) -> bool {
        self.modified
    }

    pub(crate) fn into_sides(self) -> (Option<String>, Option<String>) {
        (self.left, self.right)
    }

    pub fn edit_type(&self) -> EditType {
        match (&self.left, &self.right) {
            (None, Some(_)) => EditType::Insert,
            (Some(_), None) => EditType::Delete,
            (Some(_), Some(_)) if self.modified => EditType::Changed,
            (Some(_), Some(_)) => EditType::Equal,
            (None, None) => unreachable!("edit with no sides"),
        }
    }

    pub fn is_one_sided(&self) -> bool {
        self.left.is_none() || self.right.is_none()
    }

    /// A two-sided edit with empty text on both sides. Aligners may emit
    /// these as boundary markers; the correction pipeline drops them.
    pub fn is_zero_length(&self) -> bool {
        self.left.as_deref() == Some("") && self.right.as_deref() == Some("")
    }

    pub fn left_len(&self) -> usize {
        self.left.as_deref().map_or(0, str::len)
    }

    pub fn right_len(&self) -> usize {
        self.right.as_deref().map_or(0, str::len)
    }
}
