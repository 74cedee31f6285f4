use std::any::Any;

/// The start of every panic raised by a [`Fatal`][crate::Fatal] reporter,
/// before the location.
const FATAL_PREFIX: &str = "assertion failed at ";

/// Get the message of a caught panic, if it has one.
///
/// A panic payload can be any type, but `panic!` always leaves either a
/// `&'static str` (no format arguments) or a `String`. This is handy for
/// checking what a [`Fatal`][crate::Fatal] or [`Deferred`][crate::Deferred]
/// reporter panicked with.
///
/// ```
/// use std::panic::catch_unwind;
/// use assertive::{assert_equals, get_panic_message};
///
/// let panic = catch_unwind(|| assert_equals!(1 + 1, 3)).unwrap_err();
/// let message = get_panic_message(&panic).unwrap();
///
/// assert!(message.ends_with("got 2 want 3 instead"));
/// ```
pub fn get_panic_message(panic: &Box<dyn Any + Send>) -> Option<&str> {
    let payload: &(dyn Any + Send) = &**panic;

    match payload.downcast_ref::<&'static str>() {
        Some(message) => Some(*message),
        None => payload.downcast_ref::<String>().map(String::as_str),
    }
}

/// Get the failure a [`Fatal`][crate::Fatal] reporter panicked with,
/// without the `assertion failed at {file}:{line}: ` header. `None` if the
/// panic didn't come from a `Fatal` reporter.
///
/// ```
/// use std::panic::catch_unwind;
/// use assertive::{assert_true, get_fatal_failure};
///
/// let panic = catch_unwind(|| assert_true!(1 > 2, "ordering")).unwrap_err();
///
/// assert_eq!(
///     get_fatal_failure(&panic),
///     Some("got false want true instead\nmessage:\nordering"),
/// );
/// ```
pub fn get_fatal_failure(panic: &Box<dyn Any + Send>) -> Option<&str> {
    let (_location, failure) = get_panic_message(panic)?
        .strip_prefix(FATAL_PREFIX)?
        .split_once(": ")?;

    Some(failure)
}
