//! Test assertions that report failures through a pluggable callback.
//!
//! Each assertion checks one thing (no error, a boolean, nil-ness, equality,
//! structural equality, or equality of two multi-line strings). If the check
//! fails, it builds a description of the failure, appends the caller's
//! optional message, and hands the result to a [`Report`] exactly once.
//! The reporter decides what a failure means: [`Fatal`] panics on the spot,
//! [`Deferred`] collects failures and lets the test continue.
//!
//! ```
//! use assertive::{equals, no_diff_with, Deferred, Message};
//!
//! let mut checks = Deferred::new();
//!
//! equals(&mut checks, &(2 + 2), &4, Message::none());
//! no_diff_with(&mut checks, "a\nc\n", "a\nb\n", false, Message::none());
//!
//! assert_eq!(checks.take_failures(), ["want -  got +\n\n  a\n- b\n+ c\n"]);
//! checks.finish();
//! ```
//!
//! For the common case there are macros, which panic with a [`Fatal`]
//! reporter:
//!
//! ```
//! use assertive::{assert_equals, assert_no_diff, assert_nil};
//!
//! assert_equals!(2 + 2, 4);
//! assert_no_diff!(format!("{}\n", "line"), "line\n", "rendering {}", "line");
//! assert_nil!(None::<i32>);
//! ```

mod color;
mod compare;
pub mod diff;
mod evaluate;
mod macros;
mod message;
mod nullable;
mod panics;
mod report;

pub use color::{stdout_supports_color, ColorChoice, NO_COLOR};
pub use compare::{structural_diff, ByValue, Comparator, Structural};
pub use evaluate::{
    compare_with, deep_equals, equals, is_false, is_true, nil, no_diff, no_diff_with, no_error,
    not_nil,
};
pub use message::{compose, Failure, Message, SEPARATOR};
pub use nullable::{is_nil, Nullable};
pub use panics::{get_fatal_failure, get_panic_message};
pub use report::{Deferred, Fatal, Report};
