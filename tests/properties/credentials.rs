//! Property tests for credential derivation.

use proptest::prelude::*;

use gymdesk::{derive_username, Credentials};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Usernames only ever contain lowercase ASCII alphanumerics
    /// separated by single dots, with no dot at either end.
    #[test]
    fn property_username_charset(name in "(?s).{0,48}") {
        let username = derive_username(&name);
        prop_assert!(username
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.'));
        prop_assert!(!username.starts_with('.'));
        prop_assert!(!username.ends_with('.'));
        prop_assert!(!username.contains(".."));
    }

    /// PROPERTY: Names built from accented Latin letters always fold to a
    /// non-empty ASCII username.
    #[test]
    fn property_accented_names_fold_to_ascii(
        name in "[A-Za-záéíóúñüç]{1,12} [A-Za-záéíóúñüç]{1,12}"
    ) {
        let username = derive_username(&name);
        prop_assert!(username.is_ascii());
        prop_assert!(!username.is_empty());
    }

    /// PROPERTY: Whitespace runs collapse to a single separator.
    #[test]
    fn property_whitespace_runs_collapse(
        words in proptest::collection::vec("[a-z]{1,8}", 1..=4),
        pad in 1usize..4,
    ) {
        let name = words.join(&" ".repeat(pad));
        prop_assert_eq!(derive_username(&name), words.join("."));
    }

    /// PROPERTY: The username half of a generated pair is deterministic;
    /// the password half always has the documented shape.
    #[test]
    fn property_generate_is_stable_on_username(name in "(?s).{0,48}") {
        let a = Credentials::generate(&name);
        let b = Credentials::generate(&name);
        prop_assert_eq!(a.username, b.username);
        prop_assert_eq!(a.password.len(), 6);
        prop_assert!(a
            .password
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
