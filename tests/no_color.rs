//! Reads and writes the process environment, so everything lives in one test
//! in its own binary.

use std::env;

use assertive::{no_diff, stdout_supports_color, ColorChoice, Failure, Message, NO_COLOR};

fn no_diff_report(got: &str, want: &str) -> Vec<String> {
    let mut seen = Vec::new();
    no_diff(
        &mut |failure: &Failure<'_>| seen.push(failure.to_string()),
        got,
        want,
        Message::none(),
    );
    seen
}

#[test]
fn no_color_environment() {
    env::set_var(NO_COLOR, "1");

    assert!(!stdout_supports_color());
    assert!(!ColorChoice::Auto.resolve());
    assert!(ColorChoice::Always.resolve());

    let seen = no_diff_report("a\nc\n", "a\nb\n");
    assert_eq!(seen, ["want -  got +\n\n  a\n- b\n+ c\n"]);
    assert!(!seen[0].contains('\x1b'));

    // Any value counts, even an empty one
    env::set_var(NO_COLOR, "");
    assert!(!ColorChoice::Auto.resolve());

    // Without the flag, it comes down to whether stdout is a terminal
    env::remove_var(NO_COLOR);
    let terminal = atty::is(atty::Stream::Stdout);
    assert_eq!(stdout_supports_color(), terminal);
    assert_eq!(ColorChoice::Auto.resolve(), terminal);

    let seen = no_diff_report("a\nc\n", "a\nb\n");
    assert_eq!(seen[0].contains('\x1b'), terminal);
}
