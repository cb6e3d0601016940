use proptest::prelude::*;
use shsplit::{SplitOptions, split, split_with_options};

const MAX_INPUT_BYTES: usize = 256;

fn separator_run() -> impl Strategy<Value = String> {
    "[ \t\n]{1,4}"
}

proptest! {
    #[test]
    fn split_handles_lossy_utf8_inputs_without_panicking(
        bytes in proptest::collection::vec(any::<u8>(), 0..=MAX_INPUT_BYTES)
    ) {
        let input = String::from_utf8_lossy(&bytes).into_owned();
        let _ = split(&input);
    }

    #[test]
    fn unquoted_words_are_never_empty(input in "[a-z \t\n\\\\]{0,64}") {
        if let Ok(words) = split(&input) {
            prop_assert!(words.iter().all(|word| !word.is_empty()), "{words:?}");
        }
    }

    #[test]
    fn word_count_never_exceeds_limit(
        input in "[a-z '\"\\\\ \t\n]{0,64}",
        limit in 0usize..=6,
    ) {
        let options = SplitOptions::default().with_limit(Some(limit));
        if let Ok(words) = split_with_options(&input, &options) {
            prop_assert!(words.len() <= limit, "{words:?} exceeds {limit}");
        }
    }

    #[test]
    fn separator_runs_collapse(
        words in proptest::collection::vec("[a-z0-9]{1,8}", 0..8),
        lead in separator_run(),
        gap in separator_run(),
        trail in separator_run(),
    ) {
        let single = words.join(" ");
        let padded = format!("{lead}{}{trail}", words.join(&gap));

        let expected = split(&single).expect("split should succeed");
        prop_assert_eq!(&expected, &words);
        prop_assert_eq!(split(&padded).expect("split should succeed"), expected);
    }

    #[test]
    fn single_quoted_body_round_trips(body in "[^']{0,32}") {
        let input = format!("'{body}'");
        prop_assert_eq!(split(&input).expect("split should succeed"), vec![body]);
    }

    #[test]
    fn plain_double_quoted_body_round_trips(body in "[a-zA-Z0-9 '\t\n]{0,32}") {
        let input = format!("\"{body}\"");
        prop_assert_eq!(split(&input).expect("split should succeed"), vec![body]);
    }

    #[test]
    fn split_is_deterministic(input in "[a-z '\"\\\\ \t\n]{0,64}") {
        prop_assert_eq!(split(&input), split(&input));
    }
}
