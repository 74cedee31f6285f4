//! Panicking assertion macros.
//!
//! Each of these forwards to the assertion function of the same name, with
//! a [`Fatal`][crate::Fatal] reporter for the call site. Like [`assert_eq!`],
//! each accepts an optional trailing format message, which is included
//! after the failure description.

/// Build a [`Message`][crate::Message] from an optional format pattern and
/// arguments
#[doc(hidden)]
#[macro_export]
macro_rules! make_message {
    () => {
        $crate::Message::none()
    };

    ($fmt_pattern:literal $($fmt_arg:tt)*) => {
        $crate::Message::new(::core::format_args!($fmt_pattern $($fmt_arg)*))
    };
}

/// Assert that a `Result` is `Ok`.
///
/// ```
/// use assertive::{assert_no_error, assert_panics_with};
///
/// let parsed: Result<i32, _> = "12".parse::<i32>();
/// assert_no_error!(parsed);
///
/// assert_panics_with!(
///     assert_no_error!("x".parse::<i32>(), "parsing {}", "x"),
///     "got error \"invalid digit found in string\" want none instead\nmessage:\nparsing x",
/// );
/// ```
#[macro_export]
macro_rules! assert_no_error {
    ($result:expr $(, $( $fmt_pattern:literal $($fmt_arg:tt)* )? )?) => {
        $crate::no_error(
            &mut $crate::Fatal::here(),
            &$result,
            $crate::make_message!($($($fmt_pattern $($fmt_arg)*)?)?),
        )
    };
}

/// Assert that a `bool` is `false`.
#[macro_export]
macro_rules! assert_false {
    ($got:expr $(, $( $fmt_pattern:literal $($fmt_arg:tt)* )? )?) => {
        $crate::is_false(
            &mut $crate::Fatal::here(),
            $got,
            $crate::make_message!($($($fmt_pattern $($fmt_arg)*)?)?),
        )
    };
}

/// Assert that a `bool` is `true`.
#[macro_export]
macro_rules! assert_true {
    ($got:expr $(, $( $fmt_pattern:literal $($fmt_arg:tt)* )? )?) => {
        $crate::is_true(
            &mut $crate::Fatal::here(),
            $got,
            $crate::make_message!($($($fmt_pattern $($fmt_arg)*)?)?),
        )
    };
}

/// Assert that a value is nil. See [`Nullable`][crate::Nullable].
///
/// ```
/// use assertive::{assert_nil, assert_not_nil};
///
/// let missing: Option<&str> = None;
/// assert_nil!(missing);
/// assert_not_nil!(Some("present"));
/// assert_not_nil!(Vec::<u8>::new(), "empty isn't nil");
/// ```
#[macro_export]
macro_rules! assert_nil {
    ($got:expr $(, $( $fmt_pattern:literal $($fmt_arg:tt)* )? )?) => {
        $crate::nil(
            &mut $crate::Fatal::here(),
            &$got,
            $crate::make_message!($($($fmt_pattern $($fmt_arg)*)?)?),
        )
    };
}

/// Assert that a value isn't nil. See [`Nullable`][crate::Nullable].
#[macro_export]
macro_rules! assert_not_nil {
    ($got:expr $(, $( $fmt_pattern:literal $($fmt_arg:tt)* )? )?) => {
        $crate::not_nil(
            &mut $crate::Fatal::here(),
            &$got,
            $crate::make_message!($($($fmt_pattern $($fmt_arg)*)?)?),
        )
    };
}

/// Assert that two values are equal, with `==`.
///
/// ```
/// use assertive::assert_equals;
///
/// assert_equals!(2 + 2, 4);
/// assert_equals!(String::from("abc"), "abc", "comparing {} to a str", "a String");
/// ```
#[macro_export]
macro_rules! assert_equals {
    ($got:expr, $want:expr $(, $( $fmt_pattern:literal $($fmt_arg:tt)* )? )?) => {
        $crate::equals(
            &mut $crate::Fatal::here(),
            &$got,
            &$want,
            $crate::make_message!($($($fmt_pattern $($fmt_arg)*)?)?),
        )
    };
}

/// Assert that two values are structurally equal. On failure, the panic
/// includes a `-want +got` diff. See [`structural_diff`][crate::structural_diff].
///
/// ```
/// use assertive::{assert_deep_equals, assert_panics_with};
///
/// #[derive(Debug, PartialEq)]
/// struct Pair(i32, f64);
///
/// assert_deep_equals!(Pair(1, 2.5), Pair(1, 2.5));
///
/// assert_panics_with!(
///     assert_deep_equals!(Pair(1, 2.0), Pair(1, 2.5)),
///     "mismatch (-want +got):\n  Pair(\n      1,\n- ····2.5,\n+ ····2.0,\n  )\n",
/// );
/// ```
#[macro_export]
macro_rules! assert_deep_equals {
    ($got:expr, $want:expr $(, $( $fmt_pattern:literal $($fmt_arg:tt)* )? )?) => {
        $crate::deep_equals(
            &mut $crate::Fatal::here(),
            &$got,
            &$want,
            $crate::make_message!($($($fmt_pattern $($fmt_arg)*)?)?),
        )
    };
}

/// Assert that two strings are equal. On failure, the panic includes a line
/// diff of the two, with whitespace made visible on changed lines, colored
/// if stdout is a terminal and `NO_COLOR` isn't set.
///
/// ```
/// use assertive::assert_no_diff;
///
/// let rendered = format!("{}\n{}\n", "alpha", "beta");
/// assert_no_diff!(rendered, "alpha\nbeta\n");
/// ```
#[macro_export]
macro_rules! assert_no_diff {
    ($got:expr, $want:expr $(, $( $fmt_pattern:literal $($fmt_arg:tt)* )? )?) => {
        $crate::no_diff(
            &mut $crate::Fatal::here(),
            ::core::convert::AsRef::<str>::as_ref(&$got),
            ::core::convert::AsRef::<str>::as_ref(&$want),
            $crate::make_message!($($($fmt_pattern $($fmt_arg)*)?)?),
        )
    };
}

/// Assert that an expression panics through a [`Fatal`][crate::Fatal]
/// reporter, with exactly the given failure. See
/// [`get_fatal_failure`][crate::get_fatal_failure].
#[doc(hidden)]
#[macro_export]
macro_rules! assert_panics_with {
    ($expression:expr, $failure:expr $(,)?) => {{
        let panic = ::std::panic::catch_unwind(|| {
            $expression;
        })
        .expect_err(concat!("expression didn't panic: ", stringify!($expression)));

        let failure: &str = $failure;

        match $crate::get_fatal_failure(&panic) {
            Some(found) if found == failure => {}
            found => panic!(
                "expression panicked with the wrong failure\n   found: {:?}\nexpected: {:?}\n   panic: {:?}",
                found,
                failure,
                $crate::get_panic_message(&panic),
            ),
        }
    }};
}
