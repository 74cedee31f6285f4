use std::{
    fmt::Write as _,
    mem,
    panic::Location,
    thread,
};

use indent_write::fmt::IndentWriter;

use crate::message::Failure;

/// Something that can be notified of a failed assertion.
///
/// Each assertion calls [`report`][Report::report] at most once, and only
/// when it fails. What happens next is up to the implementation: [`Fatal`]
/// panics right away, [`Deferred`] records the failure so that the test
/// carries on, and any `FnMut(&Failure)` closure does whatever it likes.
///
/// ```
/// use assertive::{equals, Failure, Message};
///
/// let mut reports = Vec::new();
/// let mut record = |failure: &Failure<'_>| reports.push(failure.to_string());
///
/// equals(&mut record, &3, &5, Message::none());
/// equals(&mut record, &5, &5, Message::none());
///
/// assert_eq!(reports, ["got 3 want 5 instead"]);
/// ```
pub trait Report {
    fn report(&mut self, failure: &Failure<'_>);
}

impl<F> Report for F
where
    F: FnMut(&Failure<'_>),
{
    #[inline]
    fn report(&mut self, failure: &Failure<'_>) {
        self(failure)
    }
}

/// A reporter that panics on the first failure, stopping the test.
///
/// The panic message is in the same format as the rest of this crate's
/// assertions: `assertion failed at {file}:{line}: {failure}`.
#[derive(Debug, Clone, Copy)]
pub struct Fatal {
    location: &'static Location<'static>,
}

impl Fatal {
    /// Create a `Fatal` reporter that reports failures at the caller's
    /// location.
    #[track_caller]
    #[inline]
    #[must_use]
    pub fn here() -> Self {
        Self {
            location: Location::caller(),
        }
    }

    #[inline]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl Report for Fatal {
    fn report(&mut self, failure: &Failure<'_>) {
        panic!(
            "assertion failed at {file}:{line}: {failure}",
            file = self.location.file(),
            line = self.location.line(),
            failure = failure,
        )
    }
}

/// A reporter that records failures and lets the test continue.
///
/// Each failure is formatted and stored as it is reported. Call
/// [`finish`][Deferred::finish] at the end of the test to panic with all of
/// them; if a `Deferred` holding failures is dropped without being
/// finished, it panics during the drop instead (unless the thread is
/// already panicking).
///
/// ```
/// use assertive::{is_true, equals, Deferred, Message};
///
/// let mut checks = Deferred::new();
/// is_true(&mut checks, 1 + 1 == 2, Message::none());
/// equals(&mut checks, &"abc".len(), &3, Message::none());
/// checks.finish();
/// ```
///
/// ```should_panic
/// use assertive::{is_false, equals, Deferred, Message};
///
/// let mut checks = Deferred::new();
/// is_false(&mut checks, true, Message::none());
/// equals(&mut checks, &1, &2, Message::none());
///
/// // Both failures are included in the panic
/// checks.finish();
/// ```
#[derive(Debug, Default)]
pub struct Deferred {
    failures: Vec<String>,
}

impl Deferred {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// All the failures reported so far, in order
    #[inline]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Remove and return the failures reported so far, so that they can be
    /// handled some other way
    #[inline]
    pub fn take_failures(&mut self) -> Vec<String> {
        mem::take(&mut self.failures)
    }

    /// True if nothing has failed yet
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Finish the test, panicking if any failures were reported.
    #[track_caller]
    pub fn finish(mut self) {
        let failures = mem::take(&mut self.failures);

        if let Some(message) = summarize(&failures) {
            panic!("{}", message)
        }
    }
}

impl Report for Deferred {
    fn report(&mut self, failure: &Failure<'_>) {
        self.failures.push(failure.to_string());
    }
}

impl Drop for Deferred {
    fn drop(&mut self) {
        if thread::panicking() {
            return;
        }

        if let Some(message) = summarize(&self.failures) {
            panic!("{}", message)
        }
    }
}

/// Combine some failure messages into a single (indented) panic message,
/// or `None` if there are no failures.
fn summarize(failures: &[String]) -> Option<String> {
    if failures.is_empty() {
        return None;
    }

    let mut message = match failures.len() {
        1 => String::from("1 assertion failed:"),
        n => format!("{} assertions failed:", n),
    };

    for (index, failure) in failures.iter().enumerate() {
        message.push('\n');
        let mut out = IndentWriter::new("    ", &mut message);

        // Writing to a String is infallible
        let _ = write!(out, "{}. {}", index + 1, failure);
    }

    Some(message)
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;
    use crate::{compose, get_panic_message, Message};

    fn fail(report: &mut impl Report, base: &str) {
        report.report(&compose(base, Message::none()))
    }

    #[test]
    fn closure() {
        let mut seen = Vec::new();
        fail(&mut |failure: &Failure<'_>| seen.push(failure.to_string()), "one");

        assert_eq!(seen, ["one"]);
    }

    #[test]
    #[should_panic(expected = "got 1 want 2 instead")]
    fn fatal_panics() {
        fail(&mut Fatal::here(), "got 1 want 2 instead");
    }

    #[test]
    fn fatal_location() {
        let reporter = Fatal::here();
        let line = line!() - 1;

        let panic = catch_unwind(move || fail(&mut { reporter }, "failure"))
            .expect_err("Fatal reporter didn't panic");

        let message = get_panic_message(&panic).expect("panic wasn't a string");
        assert_eq!(
            message,
            format!("assertion failed at {}:{}: failure", file!(), line)
        );
    }

    #[test]
    fn deferred_continues() {
        let mut checks = Deferred::new();
        assert!(checks.is_clean());

        fail(&mut checks, "first");
        fail(&mut checks, "second");

        assert!(!checks.is_clean());
        assert_eq!(checks.failures(), ["first", "second"]);

        assert_eq!(checks.take_failures(), ["first", "second"]);
        assert!(checks.is_clean());
        checks.finish();
    }

    #[test]
    fn deferred_clean_finish() {
        Deferred::new().finish();
    }

    #[test]
    fn deferred_finish_panics_with_everything() {
        let panic = catch_unwind(|| {
            let mut checks = Deferred::new();
            fail(&mut checks, "first");
            fail(&mut checks, "second\nline");
            checks.finish();
        })
        .expect_err("Deferred::finish didn't panic");

        assert_eq!(
            get_panic_message(&panic),
            Some("2 assertions failed:\n    1. first\n    2. second\n    line")
        );
    }

    #[test]
    fn deferred_panics_on_drop() {
        let panic = catch_unwind(AssertUnwindSafe(|| {
            let mut checks = Deferred::new();
            fail(&mut checks, "dropped");
        }))
        .expect_err("Deferred didn't panic on drop");

        assert_eq!(
            get_panic_message(&panic),
            Some("1 assertion failed:\n    1. dropped")
        );
    }
}
