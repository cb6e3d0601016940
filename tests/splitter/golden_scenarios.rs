use shsplit::{split, split_n};

fn words(input: &str) -> Vec<String> {
    split(input).expect("split should succeed")
}

#[test]
fn blank_runs_delimit_words() {
    assert_eq!(words("foo bar  baz"), vec!["foo", "bar", "baz"]);
}

#[test]
fn double_quotes_keep_blanks_inside_one_word() {
    assert_eq!(words("foo \"bar baz\""), vec!["foo", "bar baz"]);
}

#[test]
fn single_quotes_keep_double_quotes_literal() {
    assert_eq!(words("foo 'bar \"qux\" baz'"), vec!["foo", "bar \"qux\" baz"]);
}

#[test]
fn escaped_blank_joins_words() {
    assert_eq!(words("foo\\ bar"), vec!["foo bar"]);
}

#[test]
fn double_quote_escapes_follow_escape_set() {
    assert_eq!(words("\"a\\$b\\\nc\\xd\""), vec!["a$bc\\xd"]);
}

#[test]
fn unterminated_single_quote_fails() {
    assert_eq!(
        split("foo 'unterminated"),
        Err(shsplit::SplitError::UnterminatedSingleQuote)
    );
}

#[test]
fn limit_two_keeps_remainder_as_last_word() {
    assert_eq!(
        split_n("a b c d", 2).expect("split should succeed"),
        vec!["a", "b c d"]
    );
}

#[test]
fn limit_one_keeps_quotes_verbatim() {
    assert_eq!(
        split_n("   'a b'   c", 1).expect("split should succeed"),
        vec!["'a b'   c"]
    );
}

#[test]
fn empty_input_yields_no_words() {
    assert_eq!(words(""), Vec::<String>::new());
}

#[test]
fn separator_only_input_yields_no_words() {
    assert_eq!(words(" \t\n  \n"), Vec::<String>::new());
}

#[test]
fn leading_and_trailing_separators_are_dropped() {
    assert_eq!(words("\n\t  echo hi \t\n"), vec!["echo", "hi"]);
}

#[test]
fn command_line_with_mixed_quoting() {
    assert_eq!(
        words("git commit -m 'fix: handle \"quotes\"' --author=\"A B <a@b.c>\""),
        vec![
            "git",
            "commit",
            "-m",
            "fix: handle \"quotes\"",
            "--author=A B <a@b.c>",
        ]
    );
}
