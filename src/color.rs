use std::env;

/// The environment variable that, when present with any value, disables
/// colored output. See <https://no-color.org>.
pub const NO_COLOR: &str = "NO_COLOR";

/// Whether diffs should be colored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorChoice {
    /// Color if stdout is a terminal and `NO_COLOR` isn't set
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide whether to color output. For [`ColorChoice::Auto`] this looks
    /// at the environment and at stdout every time it's called; nothing is
    /// cached.
    pub fn resolve(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => stdout_supports_color(),
        }
    }
}

/// True if stdout is a terminal and `NO_COLOR` isn't set.
pub fn stdout_supports_color() -> bool {
    let no_color = env::var_os(NO_COLOR).is_some();
    let terminal = atty::is(atty::Stream::Stdout);
    tracing::trace!(no_color, terminal, "resolving diff colorization");

    auto_color(no_color, terminal)
}

#[inline]
fn auto_color(no_color: bool, terminal: bool) -> bool {
    !no_color && terminal
}
