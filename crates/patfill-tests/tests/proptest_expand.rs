//! Property-based expansion tests using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p patfill-tests --test proptest_expand
//! ```

use proptest::prelude::*;

use patfill::{expand_seeded, Expander};
use patfill_spec::{is_valid_token_key, ExpandOptions, TokenTable};

/// Patterns that never contain a built-in token character.
fn non_token_pattern() -> impl Strategy<Value = String> {
    any::<String>().prop_map(|s| s.chars().filter(|c| !matches!(c, 'A' | 'a' | '#')).collect())
}

/// Options with well-formed keys and non-empty alphabets.
fn valid_options() -> impl Strategy<Value = ExpandOptions> {
    prop::collection::btree_map(any::<char>(), "\\PC{1,8}", 0..6).prop_map(|tokens| {
        tokens
            .into_iter()
            .fold(ExpandOptions::builder(), |b, (t, a)| b.token(t, a))
            .build()
    })
}

proptest! {
    /// Input without token characters comes back unchanged.
    #[test]
    fn non_token_input_is_identity(pattern in non_token_pattern(), seed in any::<u32>()) {
        let out = expand_seeded(&pattern, &ExpandOptions::default(), seed).unwrap();
        prop_assert_eq!(out, pattern);
    }

    /// Output has one character per input character.
    #[test]
    fn length_is_preserved(
        pattern in any::<String>(),
        options in valid_options(),
        seed in any::<u32>(),
    ) {
        let out = expand_seeded(&pattern, &options, seed).unwrap();
        prop_assert_eq!(out.chars().count(), pattern.chars().count());
    }

    /// Every output position is either the literal input character or a
    /// member of that token's alphabet.
    #[test]
    fn each_position_is_literal_or_from_alphabet(
        pattern in "[Aa#XYZ\\-. ]{0,40}",
        options in valid_options(),
        seed in any::<u32>(),
    ) {
        let table = TokenTable::merged(&options);
        let out = expand_seeded(&pattern, &options, seed).unwrap();

        for (input, output) in pattern.chars().zip(out.chars()) {
            match table.get(input) {
                Some(alphabet) => prop_assert!(alphabet.contains(&output)),
                None => prop_assert_eq!(input, output),
            }
        }
    }

    /// The empty pattern expands to the empty string for any valid options.
    #[test]
    fn empty_pattern_is_empty(options in valid_options(), seed in any::<u32>()) {
        prop_assert_eq!(expand_seeded("", &options, seed).unwrap(), "");
    }

    /// Keys that are not exactly one character are always rejected.
    #[test]
    fn bad_keys_are_rejected(
        key in prop_oneof![Just(String::new()), "\\PC{2,6}"],
        pattern in any::<String>(),
    ) {
        prop_assume!(!is_valid_token_key(&key));
        let options = ExpandOptions::builder().raw_token(key, "x").build();
        prop_assert!(Expander::new(&options).is_err());
        prop_assert!(expand_seeded(&pattern, &options, 0).is_err());
    }
}
