//! Minimal-edit-distance sequence alignment.
//!
//! The pipeline consumes any [`SequenceAligner`]; the bundled
//! [`MyersAligner`] implements Myers' shortest-edit-script algorithm with a
//! forward trace and a backtracking phase. The aligner emits one atomic edit
//! per token step; coalescing runs of the same type is the correction
//! pipeline's job, and the orchestrator always runs `UniteSameType` right
//! after alignment, so pre-coalesced scripts from a custom aligner behave
//! identically.

use crate::domain::edit::AtomicEdit;
use crate::domain::policy::ComparisonPolicy;
use crate::domain::word::Word;
use derive_new::new;

/// A token the aligner can compare and reassemble.
pub trait AlignToken {
    /// Text used for equality under a comparison policy.
    fn content(&self) -> &str;

    /// Exact byte contribution to the source text, whitespace prefix
    /// included. Concatenating `raw` over a token sequence reproduces the
    /// tokenized text.
    fn raw(&self) -> &str;
}

impl AlignToken for &str {
    fn content(&self) -> &str {
        self
    }

    fn raw(&self) -> &str {
        self
    }
}

impl AlignToken for Word<'_> {
    fn content(&self) -> &str {
        self.text()
    }

    fn raw(&self) -> &str {
        self.prefixed_text()
    }
}

/// Produces an ordered edit script between two token sequences.
///
/// Contract: the script covers both joined token sequences exactly (the
/// reconstruction law), equal steps carry both sides' raw text, and the
/// script is minimal under the policy's edit-distance metric. Minimality is
/// assumed, not verified; a non-minimal aligner may cause the correction
/// passes to over- or under-merge.
pub trait SequenceAligner<T: AlignToken> {
    fn align(&self, a: &[T], b: &[T], policy: ComparisonPolicy) -> Vec<AtomicEdit>;
}

/// Myers' O((N+M)D) greedy shortest-edit-script aligner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, new)]
pub struct MyersAligner;

impl<T: AlignToken> SequenceAligner<T> for MyersAligner {
    fn align(&self, a: &[T], b: &[T], policy: ComparisonPolicy) -> Vec<AtomicEdit> {
        if a.is_empty() && b.is_empty() {
            return Vec::new();
        }

        let mut edits = Vec::new();
        for (prev_x, prev_y, x, y) in backtrack(a, b, policy) {
            if x == prev_x {
                // only y advanced: an insertion
                if prev_y < b.len() as isize {
                    edits.push(AtomicEdit::inserted(b[prev_y as usize].raw()));
                }
            } else if y == prev_y {
                // only x advanced: a deletion
                if prev_x < a.len() as isize {
                    edits.push(AtomicEdit::deleted(a[prev_x as usize].raw()));
                }
            } else if prev_x < a.len() as isize {
                // diagonal move: both raw texts survive, they may differ
                // byte-wise under a loose policy
                edits.push(AtomicEdit::unchanged(
                    a[prev_x as usize].raw(),
                    b[prev_y as usize].raw(),
                ));
            }
        }

        edits.reverse();
        edits
    }
}

/// Forward pass: the furthest-reaching x per diagonal, snapshotted per
/// edit-distance step.
fn compute_trace<T: AlignToken>(a: &[T], b: &[T], policy: ComparisonPolicy) -> Vec<Vec<isize>> {
    let (n, m) = (a.len() as isize, b.len() as isize);
    let offset = (n + m) as usize;

    let mut v = vec![0isize; 2 * offset + 1];
    let mut trace = Vec::new();

    for d in 0..=(n + m) {
        trace.push(v.clone());

        for k in (-d..=d).step_by(2) {
            let idx = (offset as isize + k) as usize;

            let mut x = if k == -d {
                // only reachable from k+1, an insertion
                v[idx + 1]
            } else if k == d {
                // only reachable from k-1, a deletion
                v[idx - 1] + 1
            } else {
                let x_del = v[idx - 1] + 1;
                let x_ins = v[idx + 1];
                if x_del > x_ins { x_del } else { x_ins }
            };

            let mut y = x - k;
            while x < n
                && y < m
                && policy.content_equals(a[x as usize].content(), b[y as usize].content())
            {
                // snake
                x += 1;
                y += 1;
            }

            v[idx] = x;

            if x >= n && y >= m {
                return trace;
            }
        }
    }

    trace
}

/// Backward pass: recovers the edit path as `(prev_x, prev_y, x, y)` steps,
/// furthest step first.
fn backtrack<T: AlignToken>(
    a: &[T],
    b: &[T],
    policy: ComparisonPolicy,
) -> Vec<(isize, isize, isize, isize)> {
    let (mut x, mut y) = (a.len() as isize, b.len() as isize);
    let offset = (x + y) as usize;
    let mut path = Vec::new();

    let trace = compute_trace(a, b, policy);

    for (d, v) in trace.iter().enumerate().rev() {
        let k = x - y;

        let prev_k = if k == -(d as isize) {
            k + 1
        } else if k == (d as isize) {
            k - 1
        } else {
            let k_del = k - 1;
            let k_ins = k + 1;
            if v[(offset as isize + k_del) as usize] + 1 > v[(offset as isize + k_ins) as usize] {
                k_del
            } else {
                k_ins
            }
        };

        let prev_x = v[(offset as isize + prev_k) as usize];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            path.push((x - 1, y - 1, x, y));
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            path.push((prev_x, prev_y, x, y));
        }

        (x, y) = (prev_x, prev_y);
    }

    path
}
