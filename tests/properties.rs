//! Property tests for the fallback and identity guarantees of `align_quote`.

use proptest::prelude::*;
use quotealign::{align_quote, sanity::is_balanced};

mod prelude;
use prelude::alphanumerics;

proptest! {
    #[test]
    fn blank_fragment_is_empty(rich in "\\PC{0,60}", blank in "[ \t\n]{0,5}") {
        prop_assert_eq!(align_quote(&rich, &blank), "");
    }

    #[test]
    fn empty_rich_text_returns_trimmed_fragment(fragment in "\\PC{0,40}") {
        prop_assert_eq!(align_quote("", &fragment), fragment.trim());
    }

    #[test]
    fn exact_match_keeps_alphanumerics(
        prefix in "([a-z]{1,6} ){0,4}",
        fragment in "[a-z]{1,6}( [a-z]{1,6}){0,3}",
        suffix in "( [a-z]{1,6}){0,4}",
    ) {
        let rich = format!("{prefix}{fragment}{suffix}");
        let aligned = align_quote(&rich, &fragment);
        prop_assert_eq!(alphanumerics(&aligned), alphanumerics(&fragment));
    }

    #[test]
    fn result_is_fallback_or_balanced(
        rich in "[a-z \\[\\]/()*_~#\\-\n]{0,40}",
        fragment in "[a-z \\[\\]()*_~\n]{0,20}",
    ) {
        let aligned = align_quote(&rich, &fragment);
        prop_assert!(
            aligned == fragment.trim() || is_balanced(&aligned).expect("check runs"),
            "unbalanced result {aligned:?} for {fragment:?} in {rich:?}"
        );
    }
}
