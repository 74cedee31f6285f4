use std::fmt::{self, Write};

use super::edits::{Edit, Op};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

const VISIBLE_SPACE: char = '·';
const VISIBLE_TAB: char = '→';
const VISIBLE_CARRIAGE_RETURN: char = '␍';

/// Written (with a gutter) after a changed line that has no trailing newline
const NO_NEWLINE: &str = "no newline at end";

/// Options for [`render`] and [`write_diff`]. The default renders no gutter
/// and no color.
///
/// ```
/// use assertive::diff::RenderOptions;
///
/// let options = RenderOptions::new().with_gutter().with_color();
/// assert!(options.gutter);
/// assert!(options.color);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix each line with a two-column gutter: `"- "` for deleted lines,
    /// `"+ "` for inserted lines, `"  "` for unchanged lines.
    pub gutter: bool,

    /// Wrap the text of deleted lines in red and inserted lines in green
    /// ANSI escapes. Unchanged lines are never colored.
    pub color: bool,
}

impl RenderOptions {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gutter: false,
            color: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_gutter(self) -> Self {
        Self {
            gutter: true,
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_color(self) -> Self {
        Self {
            color: true,
            ..self
        }
    }

    /// The prefix written before a line of the given kind. Without a gutter
    /// or a color, changed lines still need something to mark them, so a
    /// single-column marker is used.
    fn prefix(&self, op: Op) -> &'static str {
        match (self.gutter, self.color, op) {
            (true, _, Op::Keep) => "  ",
            (true, _, Op::Delete) => "- ",
            (true, _, Op::Insert) => "+ ",
            (false, true, _) => "",
            (false, false, Op::Keep) => " ",
            (false, false, Op::Delete) => "-",
            (false, false, Op::Insert) => "+",
        }
    }

    fn color(&self, op: Op) -> Option<&'static str> {
        match (self.color, op) {
            (false, _) | (true, Op::Keep) => None,
            (true, Op::Delete) => Some(RED),
            (true, Op::Insert) => Some(GREEN),
        }
    }
}

/// Write the text of a changed line, with whitespace replaced by visible
/// glyphs.
fn write_visible(out: &mut impl Write, text: &str) -> fmt::Result {
    text.chars().try_for_each(|c| {
        out.write_char(match c {
            ' ' => VISIBLE_SPACE,
            '\t' => VISIBLE_TAB,
            '\r' => VISIBLE_CARRIAGE_RETURN,
            c => c,
        })
    })
}

/// Write an edit script as a line-oriented report.
///
/// Every edit becomes one output line. Changed lines have their spaces, tabs
/// and carriage returns made visible, so that whitespace-only differences
/// can be seen; if a changed line has no trailing newline, it's followed by
/// a `\ no newline at end` marker line. Unchanged lines are written as-is.
pub fn write_diff(out: &mut impl Write, edits: &[Edit<'_>], options: RenderOptions) -> fmt::Result {
    for edit in edits {
        let (text, newline) = match edit.line.strip_suffix('\n') {
            Some(text) => (text, true),
            None => (edit.line, false),
        };

        out.write_str(options.prefix(edit.op))?;

        if !edit.is_change() {
            out.write_str(text)?;
            out.write_char('\n')?;
            continue;
        }

        let color = options.color(edit.op);

        if let Some(color) = color {
            out.write_str(color)?;
        }

        write_visible(out, text)?;

        if color.is_some() {
            out.write_str(RESET)?;
        }

        out.write_char('\n')?;

        if !newline {
            writeln!(out, "\\ {}", NO_NEWLINE)?;
        }
    }

    Ok(())
}

/// Render an edit script to a `String`. See [`write_diff`].
///
/// ```
/// use assertive::diff::{compute_edits, render, split_lines, RenderOptions};
///
/// let want = split_lines("a\nb\n");
/// let got = split_lines("a\nc d\n");
/// let edits = compute_edits(&want, &got);
///
/// assert_eq!(
///     render(&edits, RenderOptions::new().with_gutter()),
///     "  a\n- b\n+ c·d\n",
/// );
/// ```
pub fn render(edits: &[Edit<'_>], options: RenderOptions) -> String {
    let mut out = String::new();

    // Writing to a String is infallible
    let _ = write_diff(&mut out, edits, options);
    out
}
