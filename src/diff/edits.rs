use similar::{capture_diff_slices, Algorithm, DiffTag};

/// What an [`Edit`] does to its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// The line is present in both sequences.
    Keep,

    /// The line is only present in the source (`want`) sequence.
    Delete,

    /// The line is only present in the target (`got`) sequence.
    Insert,
}

/// A single step of an edit script. Borrows its line from one of the input
/// sequences (the source for [`Op::Delete`], the target for [`Op::Insert`],
/// either for [`Op::Keep`], since they're equal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edit<'a> {
    pub op: Op,
    pub line: &'a str,
}

impl<'a> Edit<'a> {
    #[inline]
    pub fn keep(line: &'a str) -> Self {
        Self { op: Op::Keep, line }
    }

    #[inline]
    pub fn delete(line: &'a str) -> Self {
        Self {
            op: Op::Delete,
            line,
        }
    }

    #[inline]
    pub fn insert(line: &'a str) -> Self {
        Self {
            op: Op::Insert,
            line,
        }
    }

    /// True if this edit changes something (it isn't a [`Op::Keep`])
    #[inline]
    pub fn is_change(&self) -> bool {
        self.op != Op::Keep
    }
}

/// Compute an edit script that transforms `want` into `got`.
///
/// The lines the script keeps are a longest common subsequence of the two
/// inputs (found with Myers' algorithm), and every other line is deleted
/// from `want` or inserted from `got`. Inside each changed region,
/// deletions are emitted before insertions.
///
/// Lines are compared exactly; nothing (including trailing whitespace or
/// the trailing newline) is normalized.
///
/// ```
/// use assertive::diff::{compute_edits, Edit};
///
/// let edits = compute_edits(&["a\n", "b\n"], &["a\n", "c\n"]);
///
/// assert_eq!(
///     edits,
///     [Edit::keep("a\n"), Edit::delete("b\n"), Edit::insert("c\n")],
/// );
/// ```
pub fn compute_edits<'a>(want: &[&'a str], got: &[&'a str]) -> Vec<Edit<'a>> {
    let mut edits = Vec::with_capacity(want.len().max(got.len()));
    let mut region = Region::default();

    for op in capture_diff_slices(Algorithm::Myers, want, got) {
        let (tag, want_range, got_range) = op.as_tag_tuple();

        match tag {
            DiffTag::Equal => {
                region.flush(&mut edits);
                edits.extend(want[want_range].iter().copied().map(Edit::keep));
            }
            DiffTag::Delete => region.deleted.extend_from_slice(&want[want_range]),
            DiffTag::Insert => region.inserted.extend_from_slice(&got[got_range]),
            DiffTag::Replace => {
                region.deleted.extend_from_slice(&want[want_range]);
                region.inserted.extend_from_slice(&got[got_range]);
            }
        }
    }

    region.flush(&mut edits);
    edits
}

/// The lines changed between two kept lines. Myers can interleave deletes
/// and inserts here; they're collected so that every delete comes first.
#[derive(Default)]
struct Region<'a> {
    deleted: Vec<&'a str>,
    inserted: Vec<&'a str>,
}

impl<'a> Region<'a> {
    fn flush(&mut self, edits: &mut Vec<Edit<'a>>) {
        edits.extend(self.deleted.drain(..).map(Edit::delete));
        edits.extend(self.inserted.drain(..).map(Edit::insert));
    }
}
