//! Line-level text diffs.
//!
//! Text is split into lines with [`split_lines`], turned into an edit script
//! with [`compute_edits`], and rendered with [`render`] or [`write_diff`].
//! [`lines`] does all three at once.
//!
//! ```
//! use assertive::diff::{lines, RenderOptions};
//!
//! let report = lines("one\ntwo\n", "one\n2\n", RenderOptions::new().with_gutter());
//! assert_eq!(report, "  one\n- two\n+ 2\n");
//! ```

mod edits;
mod render;

pub use edits::{compute_edits, Edit, Op};
pub use render::{render, write_diff, RenderOptions};

/// Split text into lines, keeping the `\n` at the end of each one.
///
/// A final line without a newline is still a line, but the empty fragment
/// after a trailing newline isn't, so `"a\n"` is one line and `""` is none.
///
/// ```
/// use assertive::diff::split_lines;
///
/// assert_eq!(split_lines("a\nb\n"), ["a\n", "b\n"]);
/// assert_eq!(split_lines("a\nb"), ["a\n", "b"]);
/// assert!(split_lines("").is_empty());
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Diff two strings line by line and render the result.
pub fn lines(want: &str, got: &str, options: RenderOptions) -> String {
    let want = split_lines(want);
    let got = split_lines(got);
    render(&compute_edits(&want, &got), options)
}
