use std::{fmt::Debug, ptr};

use crate::diff::{self, RenderOptions};

/// A way of comparing two values that describes how they differ.
///
/// There are two comparators, and which one applies is decided by the
/// caller from the types involved: [`ByValue`] for plain `==` equality, and
/// [`Structural`] for composite values, where a field-by-field description of
/// the difference is more useful than the two values side by side.
pub trait Comparator<T: ?Sized> {
    /// Compare `want` and `got`, returning a description of the mismatch,
    /// or `None` if they're equal.
    fn describe(&self, want: &T, got: &T) -> Option<String>;
}

/// Compare values with `==`, describing a mismatch by showing both.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByValue;

impl<T: PartialEq + Debug + ?Sized> Comparator<T> for ByValue {
    fn describe(&self, want: &T, got: &T) -> Option<String> {
        if got == want {
            None
        } else {
            Some(format!("got {:?} want {:?} instead", got, want))
        }
    }
}

/// Compare values structurally, describing a mismatch with a `-want +got`
/// diff. See [`structural_diff`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Structural;

impl<T: PartialEq + Debug + ?Sized> Comparator<T> for Structural {
    fn describe(&self, want: &T, got: &T) -> Option<String> {
        let diff = structural_diff(want, got);

        if diff.is_empty() {
            None
        } else {
            Some(diff)
        }
    }
}

/// Written after a diff whose lines are all kept: the values aren't `==`,
/// but nothing in their `Debug` output shows why.
const SAME_RENDERING: &str = "\\ values differ but print identically\n";

/// Compare two values structurally. Returns an empty string if they're
/// equal, or a line diff of their pretty-printed `Debug` representations if
/// they aren't.
///
/// Equality is decided by `PartialEq` alone, except that a value is always
/// equal to itself (the same reference), even if it holds a NaN. The diff
/// renders the whole value, so fields are shown regardless of their
/// visibility, and pointers (`Box`, `Rc`, `&`) are shown by what they point
/// to, rather than by address. If two unequal values print identically (a
/// `Debug` impl that skips fields, or two NaNs), the diff says so instead
/// of coming out empty.
///
/// ```
/// use assertive::structural_diff;
///
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// assert_eq!(structural_diff(&Point { x: 1, y: 2 }, &Point { x: 1, y: 2 }), "");
///
/// let diff = structural_diff(&Point { x: 1, y: 2 }, &Point { x: 1, y: 3 });
/// assert!(diff.starts_with("mismatch (-want +got):\n"));
/// assert!(diff.contains("\n- ····y:·2,\n"));
/// assert!(diff.contains("\n+ ····y:·3,\n"));
/// ```
pub fn structural_diff<T: PartialEq + Debug + ?Sized>(want: &T, got: &T) -> String {
    if ptr::eq(want, got) || want == got {
        return String::new();
    }

    let want = format!("{:#?}\n", want);
    let got = format!("{:#?}\n", got);

    let mut diff = format!(
        "mismatch (-want +got):\n{}",
        diff::lines(&want, &got, RenderOptions::new().with_gutter())
    );

    if want == got {
        diff.push_str(SAME_RENDERING);
    }

    diff
}
