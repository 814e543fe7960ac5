//! Output tree nodes.
//!
//! A `Fragment` is a diff region with a classified type and half-open byte
//! ranges on both sides; a `LineFragment` additionally tracks line numbers
//! and line counts per side. Ranges always index the *original* texts, at
//! every nesting depth, so concatenating one side's ranges in order
//! reproduces that side's input byte-for-byte.

use crate::domain::edit::EditType;
use std::ops::Range;

/// A node in the difference tree.
///
/// `edit_type == None` marks unchanged/context regions, including text that
/// only matches under a whitespace-insensitive policy. Children are present
/// only on two-sided `Changed` fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    edit_type: Option<EditType>,
    range_left: Range<usize>,
    range_right: Range<usize>,
    children: Vec<Fragment>,
}

impl Fragment {
    pub(crate) fn new(
        edit_type: Option<EditType>,
        range_left: Range<usize>,
        range_right: Range<usize>,
    ) -> Self {
        Self {
            edit_type,
            range_left,
            range_right,
            children: Vec::new(),
        }
    }

    pub fn edit_type(&self) -> Option<EditType> {
        self.edit_type
    }

    pub fn range_left(&self) -> Range<usize> {
        self.range_left.clone()
    }

    pub fn range_right(&self) -> Range<usize> {
        self.range_right.clone()
    }

    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    pub(crate) fn set_children(&mut self, children: Vec<Fragment>) {
        self.children = children;
    }

    /// Slice of the original left text covered by this fragment.
    pub fn text_left<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range_left()]
    }

    /// Slice of the original right text covered by this fragment.
    pub fn text_right<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range_right()]
    }
}

/// A top-level fragment with line accounting on both sides.
///
/// `line_count_*` equals the number of line terminators in the covered text,
/// plus one if the text is non-empty and does not end in a terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFragment {
    edit_type: Option<EditType>,
    range_left: Range<usize>,
    range_right: Range<usize>,
    start_line_left: u32,
    line_count_left: u32,
    start_line_right: u32,
    line_count_right: u32,
    children: Vec<Fragment>,
}

impl LineFragment {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        edit_type: Option<EditType>,
        range_left: Range<usize>,
        range_right: Range<usize>,
        start_line_left: u32,
        line_count_left: u32,
        start_line_right: u32,
        line_count_right: u32,
    ) -> Self {
        Self {
            edit_type,
            range_left,
            range_right,
            start_line_left,
            line_count_left,
            start_line_right,
            line_count_right,
            children: Vec::new(),
        }
    }

    pub fn edit_type(&self) -> Option<EditType> {
        self.edit_type
    }

    pub fn range_left(&self) -> Range<usize> {
        self.range_left.clone()
    }

    pub fn range_right(&self) -> Range<usize> {
        self.range_right.clone()
    }

    pub fn start_line_left(&self) -> u32 {
        self.start_line_left
    }

    pub fn line_count_left(&self) -> u32 {
        self.line_count_left
    }

    pub fn start_line_right(&self) -> u32 {
        self.start_line_right
    }

    pub fn line_count_right(&self) -> u32 {
        self.line_count_right
    }

    /// Word-level children; populated only for two-sided `Changed` fragments.
    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    pub(crate) fn set_children(&mut self, children: Vec<Fragment>) {
        self.children = children;
    }

    pub fn text_left<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range_left()]
    }

    pub fn text_right<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range_right()]
    }
}
