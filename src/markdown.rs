//! Markdown edge fixes for a repaired span.
//!
//! Selections rarely include the `# `, `- ` or `1. ` that starts a source
//! line, and a selection ending inside a link label leaves the target
//! dangling. These helpers carry such markers over and strip marker-only
//! lines the extension leaves behind.

use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;

use crate::lazy_regex;

// Block-marker characters: whitespace, `*#.`, digits, backtick, `-+~`.
static TRAILING_MARKER_RE: LazyLock<Regex> =
    lazy_regex!(r"[\s*#0-9.`\-+~]+$", "valid trailing marker regex");
static TRAILING_MARKER_LINE_RE: LazyLock<Regex> =
    lazy_regex!(r"\n[\s*#0-9.`\-+~]+$", "valid trailing marker line regex");
static LEADING_MARKER_LINE_RE: LazyLock<Regex> =
    lazy_regex!(r"^[\s*#0-9.`\-+~]+\n", "valid leading marker line regex");

/// Complete a span ending in an open link target `](` with the rest of the
/// target from `after`, up to and including the next `)`.
///
/// Without a closing parenthesis all of `after` is taken.
#[must_use]
pub fn complete_link(mut matched: String, after: &str) -> String {
    if matched.ends_with("](") {
        let end = after.find(')').map_or(after.len(), |idx| idx + 1);
        matched.push_str(&after[..end]);
    }
    matched
}

/// The block-marker run at the end of the last line of `before`, if any.
#[must_use]
pub fn carry_block_marker(before: &str) -> Option<&str> {
    let last_line = before.rsplit('\n').next().unwrap_or(before);
    TRAILING_MARKER_RE.find(last_line).map(|m| m.as_str())
}

/// Drop a marker-only last line, then a marker-only first line.
#[must_use]
pub fn trim_marker_lines(text: &str) -> Cow<'_, str> {
    match TRAILING_MARKER_LINE_RE.replace(text, "") {
        Cow::Borrowed(text) => LEADING_MARKER_LINE_RE.replace(text, ""),
        Cow::Owned(trimmed) => {
            Cow::Owned(LEADING_MARKER_LINE_RE.replace(&trimmed, "").into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("[text](", "https://x) now", "[text](https://x)")]
    #[case("[text](", "https://x", "[text](https://x")]
    #[case("[text](", ") tail", "[text]()")]
    #[case("[text](https://x)", " more)", "[text](https://x)")]
    #[case("plain", "rest)", "plain")]
    fn completes_open_link_targets(
        #[case] matched: &str,
        #[case] after: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(complete_link(matched.to_string(), after), expected);
    }

    #[rstest]
    #[case("# ", Some("# "))]
    #[case("intro\n## ", Some("## "))]
    #[case("para\n\n- ", Some("- "))]
    #[case("text\n  1. ", Some("  1. "))]
    #[case("* * ", Some("* * "))]
    #[case("words ", Some(" "))]
    #[case("words", None)]
    #[case("line\n", None)]
    #[case("", None)]
    fn finds_block_markers(#[case] before: &str, #[case] expected: Option<&str>) {
        assert_eq!(carry_block_marker(before), expected);
    }

    #[rstest]
    #[case("item one\n- ", "item one")]
    #[case("# \nHeading", "Heading")]
    #[case("- \nbody\n---", "body")]
    #[case("## Heading", "## Heading")]
    #[case("one\ntwo", "one\ntwo")]
    fn trims_marker_only_lines(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(trim_marker_lines(text), expected);
    }
}
