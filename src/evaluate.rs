//! The assertions themselves.
//!
//! Every assertion here takes a [`Report`], the values to check, and an
//! optional [`Message`]. If the check passes, nothing happens. If it fails,
//! a description of the failure is composed with the message and handed to
//! the reporter, exactly once. None of them panic on their own; whether a
//! failure stops the test is up to the reporter.

use std::fmt::{Debug, Display};

use crate::{
    color::ColorChoice,
    compare::{Comparator, Structural},
    diff::{self, RenderOptions},
    message::{compose, Message},
    nullable::Nullable,
    report::Report,
};

/// Written at the top of a [`no_diff`] failure, to explain the gutter
const NO_DIFF_HEADER: &str = "want -  got +\n\n";

fn fail<R: Report + ?Sized>(
    report: &mut R,
    predicate: &'static str,
    base: &str,
    message: Message<'_>,
) {
    tracing::debug!(predicate, "assertion failed");
    report.report(&compose(base, message))
}

/// Fails if `result` is an error.
pub fn no_error<T, E, R>(report: &mut R, result: &Result<T, E>, message: Message<'_>)
where
    E: Display,
    R: Report + ?Sized,
{
    if let Err(err) = result {
        let base = format!("got error {:?} want none instead", err.to_string());
        fail(report, "no_error", &base, message)
    }
}

/// Fails if `got` is true.
pub fn is_false<R: Report + ?Sized>(report: &mut R, got: bool, message: Message<'_>) {
    if got {
        fail(report, "is_false", "got true want false instead", message)
    }
}

/// Fails if `got` is false.
pub fn is_true<R: Report + ?Sized>(report: &mut R, got: bool, message: Message<'_>) {
    if !got {
        fail(report, "is_true", "got false want true instead", message)
    }
}

/// Fails if `got` isn't nil. See [`Nullable`].
pub fn nil<T, R>(report: &mut R, got: &T, message: Message<'_>)
where
    T: Nullable + Debug + ?Sized,
    R: Report + ?Sized,
{
    if !got.is_nil() {
        let base = format!("got {:?} want nil instead", got);
        fail(report, "nil", &base, message)
    }
}

/// Fails if `got` is nil. See [`Nullable`].
pub fn not_nil<T, R>(report: &mut R, got: &T, message: Message<'_>)
where
    T: Nullable + ?Sized,
    R: Report + ?Sized,
{
    if got.is_nil() {
        fail(report, "not_nil", "got nil want non-nil instead", message)
    }
}

/// Fails if `got != want`.
pub fn equals<G, W, R>(report: &mut R, got: &G, want: &W, message: Message<'_>)
where
    G: PartialEq<W> + Debug + ?Sized,
    W: Debug + ?Sized,
    R: Report + ?Sized,
{
    if got != want {
        let base = format!("got {:?} want {:?} instead", got, want);
        fail(report, "equals", &base, message)
    }
}

/// Fails if `got` and `want` differ according to `comparator`, reporting
/// the comparator's description of the difference.
pub fn compare_with<C, T, R>(
    report: &mut R,
    comparator: &C,
    got: &T,
    want: &T,
    message: Message<'_>,
) where
    C: Comparator<T> + ?Sized,
    T: ?Sized,
    R: Report + ?Sized,
{
    if let Some(base) = comparator.describe(want, got) {
        fail(report, "compare_with", &base, message)
    }
}

/// Fails if `got` and `want` aren't structurally equal, reporting a
/// `-want +got` diff. See [`structural_diff`][crate::structural_diff].
pub fn deep_equals<T, R>(report: &mut R, got: &T, want: &T, message: Message<'_>)
where
    T: PartialEq + Debug + ?Sized,
    R: Report + ?Sized,
{
    if let Some(base) = Structural.describe(want, got) {
        fail(report, "deep_equals", &base, message)
    }
}

/// Fails if `got` and `want` differ, reporting a line diff of the two.
///
/// The diff has a gutter, and whitespace on changed lines is made visible.
/// Deleted lines are red and inserted lines are green if stdout is a
/// terminal and `NO_COLOR` isn't set; this is checked on every failure.
/// Use [`no_diff_with`] to decide about colors yourself.
pub fn no_diff<R: Report + ?Sized>(report: &mut R, got: &str, want: &str, message: Message<'_>) {
    if got != want {
        no_diff_with(report, got, want, ColorChoice::Auto.resolve(), message)
    }
}

/// Like [`no_diff`], but with explicit control over whether the diff is
/// colored.
///
/// ```
/// use assertive::{no_diff_with, Failure, Message};
///
/// let mut reports = Vec::new();
/// no_diff_with(
///     &mut |failure: &Failure<'_>| reports.push(failure.to_string()),
///     "a\nc\n",
///     "a\nb\n",
///     false,
///     Message::none(),
/// );
///
/// assert_eq!(reports, ["want -  got +\n\n  a\n- b\n+ c\n"]);
/// ```
pub fn no_diff_with<R: Report + ?Sized>(
    report: &mut R,
    got: &str,
    want: &str,
    color: bool,
    message: Message<'_>,
) {
    if got == want {
        return;
    }

    let options = if color {
        RenderOptions::new().with_gutter().with_color()
    } else {
        RenderOptions::new().with_gutter()
    };

    let mut base = String::from(NO_DIFF_HEADER);
    base.push_str(&diff::lines(want, got, options));
    fail(report, "no_diff", &base, message)
}

#[cfg(test)]
mod tests {
    use std::{fmt, rc::Rc};

    use super::*;
    use crate::{compare::ByValue, message::Failure};

    /// Run an assertion with a reporter that records everything it's given
    fn reports(check: impl FnOnce(&mut dyn Report)) -> Vec<String> {
        let mut seen = Vec::new();
        check(&mut |failure: &Failure<'_>| seen.push(failure.to_string()));
        seen
    }

    #[derive(Debug)]
    struct Boom;

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("boom")
        }
    }

    #[test]
    fn no_error_fails() {
        let result: Result<(), Boom> = Err(Boom);
        let seen = reports(|r| no_error(r, &result, Message::none()));

        assert_eq!(seen, [r#"got error "boom" want none instead"#]);
        assert!(seen[0].contains("boom"));
        assert!(seen[0].contains("want none"));
    }

    #[test]
    fn no_error_passes() {
        let result: Result<i32, Boom> = Ok(1);
        assert!(reports(|r| no_error(r, &result, Message::none())).is_empty());
    }

    #[test]
    fn no_error_with_message() {
        let result: Result<(), String> = Err("boom".to_owned());
        let seen = reports(|r| {
            no_error(r, &result, Message::new(format_args!("failed to {:?}", "wow")))
        });

        assert_eq!(
            seen,
            ["got error \"boom\" want none instead\nmessage:\nfailed to \"wow\""]
        );
    }

    #[test]
    fn booleans() {
        assert_eq!(
            reports(|r| is_false(r, true, Message::none())),
            ["got true want false instead"]
        );
        assert_eq!(
            reports(|r| is_true(r, false, Message::none())),
            ["got false want true instead"]
        );
        assert!(reports(|r| is_false(r, false, Message::none())).is_empty());
        assert!(reports(|r| is_true(r, true, Message::none())).is_empty());
    }

    #[test]
    fn nil_fails() {
        assert_eq!(
            reports(|r| nil(r, &Some(4), Message::none())),
            ["got Some(4) want nil instead"]
        );
    }

    #[test]
    fn nil_passes() {
        let absent: Option<Vec<u8>> = None;
        assert!(reports(|r| nil(r, &absent, Message::none())).is_empty());
    }

    #[test]
    fn not_nil() {
        let absent: Option<Rc<u8>> = None;
        assert_eq!(
            reports(|r| super::not_nil(r, &absent, Message::none())),
            ["got nil want non-nil instead"]
        );
        assert!(reports(|r| super::not_nil(r, &Some(Rc::new(1)), Message::none())).is_empty());
        assert!(reports(|r| super::not_nil(r, &Vec::<u8>::new(), Message::none())).is_empty());
    }

    #[test]
    fn equals_fails() {
        let seen = reports(|r| equals(r, &3, &5, Message::none()));

        assert_eq!(seen, ["got 3 want 5 instead"]);
        assert!(seen[0].contains('3'));
        assert!(seen[0].contains('5'));
    }

    #[test]
    fn equals_passes() {
        assert!(reports(|r| equals(r, &3, &3, Message::none())).is_empty());
    }

    #[test]
    fn equals_across_types() {
        let got = String::from("abc");
        assert!(reports(|r| equals(r, &got, "abc", Message::none())).is_empty());
        assert_eq!(
            reports(|r| equals(r, &got, "abd", Message::none())),
            [r#"got "abc" want "abd" instead"#]
        );
    }

    #[test]
    fn compare_with_by_value() {
        assert_eq!(
            reports(|r| compare_with(r, &ByValue, &1.5, &2.5, Message::none())),
            ["got 1.5 want 2.5 instead"]
        );
    }

    #[derive(Debug, PartialEq)]
    struct Config {
        name: &'static str,
        retries: Vec<u32>,
    }

    #[test]
    fn deep_equals_fails() {
        let got = Config {
            name: "svc",
            retries: vec![1, 2],
        };
        let want = Config {
            name: "svc",
            retries: vec![1, 3],
        };

        let seen = reports(|r| deep_equals(r, &got, &want, Message::none()));

        assert_eq!(seen.len(), 1);
        assert!(seen[0].starts_with("mismatch (-want +got):\n"));
        assert!(seen[0].contains("\n- ········3,\n"));
        assert!(seen[0].contains("\n+ ········2,\n"));
    }

    #[test]
    fn deep_equals_passes() {
        let config = || Config {
            name: "svc",
            retries: vec![1, 2],
        };

        assert!(reports(|r| deep_equals(r, &config(), &config(), Message::none())).is_empty());
    }

    #[test]
    fn no_diff_fails() {
        let seen = reports(|r| no_diff_with(r, "a\nc\n", "a\nb\n", false, Message::none()));

        assert_eq!(seen, ["want -  got +\n\n  a\n- b\n+ c\n"]);
        assert!(!seen[0].contains("- a"));
        assert!(!seen[0].contains("+ a"));
    }

    #[test]
    fn no_diff_colored() {
        let seen = reports(|r| no_diff_with(r, "a\nc\n", "a\nb\n", true, Message::none()));

        assert_eq!(
            seen,
            ["want -  got +\n\n  a\n- \x1b[31mb\x1b[0m\n+ \x1b[32mc\x1b[0m\n"]
        );
    }

    #[test]
    fn no_diff_passes() {
        let text = "a\nb\n";

        assert!(reports(|r| no_diff(r, text, text, Message::none())).is_empty());
        assert!(reports(|r| no_diff_with(r, text, text, true, Message::none())).is_empty());
        assert!(reports(|r| no_diff_with(r, text, text, false, Message::none())).is_empty());
    }

    #[test]
    fn no_diff_auto_color() {
        let seen = reports(|r| no_diff(r, "x\n", "y\n", Message::none()));

        assert_eq!(seen.len(), 1);
        assert!(seen[0].starts_with(NO_DIFF_HEADER));
        assert!(seen[0].contains('x'));
        assert!(seen[0].contains('y'));
    }

    #[test]
    fn no_diff_with_message() {
        let seen = reports(|r| {
            no_diff_with(r, "a\n", "b\n", false, Message::new(format_args!("file {}", "out.txt")))
        });

        assert_eq!(
            seen,
            ["want -  got +\n\n- b\n+ a\n\nmessage:\nfile out.txt"]
        );
    }
}
