use std::{
    any::Any,
    fmt::{self, Arguments, Display, Formatter},
};

/// Placed between the generated description of a failure and the user's
/// message, for every kind of assertion.
pub const SEPARATOR: &str = "\nmessage:\n";

#[derive(Debug, Clone, Copy)]
enum Content<'a> {
    Args(Arguments<'a>),
    Text(&'a str),
}

impl Display for Content<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Content::Args(args) => args.fmt(f),
            Content::Text(text) => f.write_str(text),
        }
    }
}

/// An optional, user-supplied message to include with an assertion failure.
///
/// A message built from [`format_args!`] is held as [`Arguments`], so it
/// isn't formatted until a failure is actually reported, and then only by
/// the reporter. Because `Arguments` borrow temporaries, a `Message` is
/// usually built right in the argument list of the assertion that uses it.
///
/// ```
/// use assertive::Message;
///
/// let name = "config.toml";
/// assert!(Message::new(format_args!("while loading {}", name)).is_some());
/// assert!(Message::none().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Message<'a> {
    content: Option<Content<'a>>,
}

impl<'a> Message<'a> {
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self { content: None }
    }

    #[inline]
    #[must_use]
    pub const fn new(args: Arguments<'a>) -> Self {
        Self {
            content: Some(Content::Args(args)),
        }
    }

    /// A message with no format arguments
    #[inline]
    #[must_use]
    pub const fn text(text: &'a str) -> Self {
        Self {
            content: Some(Content::Text(text)),
        }
    }

    /// Build a message from a dynamically typed value. Strings (`&str` and
    /// `String`) become the message; anything else is treated as no message
    /// at all, rather than as an error.
    ///
    /// ```
    /// use assertive::Message;
    ///
    /// assert!(Message::from_dyn(&"context").is_some());
    /// assert!(Message::from_dyn(&42).is_none());
    /// ```
    pub fn from_dyn(value: &'a dyn Any) -> Self {
        if let Some(text) = value.downcast_ref::<&'static str>() {
            Self::text(text)
        } else if let Some(text) = value.downcast_ref::<String>() {
            Self::text(text)
        } else {
            Self::none()
        }
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        self.content.is_some()
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.content.is_none()
    }
}

impl<'a> From<Arguments<'a>> for Message<'a> {
    #[inline]
    fn from(args: Arguments<'a>) -> Self {
        Self::new(args)
    }
}

impl<'a> From<Option<Arguments<'a>>> for Message<'a> {
    #[inline]
    fn from(args: Option<Arguments<'a>>) -> Self {
        Self {
            content: args.map(Content::Args),
        }
    }
}

impl<'a> From<&'a str> for Message<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Self::text(text)
    }
}

/// Formats the message itself, or nothing if there isn't one.
impl Display for Message<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.content {
            Some(content) => content.fmt(f),
            None => Ok(()),
        }
    }
}

/// A failed assertion, ready to be reported.
///
/// Displays as the generated description of what went wrong, followed by
/// the [`SEPARATOR`] and the user's message exactly as given, if there is
/// one.
#[derive(Debug, Clone, Copy)]
pub struct Failure<'a> {
    base: &'a str,
    message: Message<'a>,
}

impl<'a> Failure<'a> {
    /// The generated description of the failure
    #[inline]
    pub fn base(&self) -> &'a str {
        self.base
    }

    /// The user's message, not yet formatted
    #[inline]
    pub fn message(&self) -> Message<'a> {
        self.message
    }
}

impl Display for Failure<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.base)?;

        match self.message.content {
            None => Ok(()),
            Some(content) => {
                f.write_str(SEPARATOR)?;
                content.fmt(f)
            }
        }
    }
}

/// Combine a generated failure description with an optional user message.
///
/// Nothing is formatted here; the user's message is carried along as-is and
/// only interpolated when the [`Failure`] is displayed.
///
/// ```
/// use assertive::{compose, Message};
///
/// assert_eq!(
///     compose("got 3 want 5 instead", Message::none()).to_string(),
///     "got 3 want 5 instead",
/// );
///
/// assert_eq!(
///     compose("got 3 want 5 instead", format_args!("row {}", 12).into()).to_string(),
///     "got 3 want 5 instead\nmessage:\nrow 12",
/// );
/// ```
#[inline]
pub fn compose<'a>(base: &'a str, message: Message<'a>) -> Failure<'a> {
    Failure { base, message }
}
