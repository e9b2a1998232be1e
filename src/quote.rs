//! Helpers for complete `[quote]` blocks.

use std::sync::LazyLock;

use regex::Regex;

use crate::{align::align_quote, lazy_regex, multiline::coerce_multi_line};

static QUOTE_BLOCK_RE: LazyLock<Regex> = lazy_regex!(
    r"^(\s*\[quote[^\]]*\])([\s\S]+)(\[/quote\]\s*)$",
    "valid quote block regex",
);

/// Whether `text` is a single `[quote ...]...[/quote]` block.
#[must_use]
pub fn is_quote_block(text: &str) -> bool {
    QUOTE_BLOCK_RE.is_match(text)
}

/// Narrow a full quote block down to the part matching `selected`.
///
/// The wrapper tags are kept and the content between them is replaced by
/// [`align_quote`] of the selection. Text that is not a quote block, or a
/// blank selection, only has its line layout normalised.
///
/// # Examples
///
/// ```
/// use quotealign::quote_to_partial;
///
/// let partial = quote_to_partial("[quote=a]one [i]two[/i] three[/quote]", "two");
/// assert_eq!(partial, "[quote=a]\n[i]two[/i]\n[/quote]");
/// ```
#[must_use]
pub fn quote_to_partial(block: &str, selected: &str) -> String {
    if selected.trim().is_empty() {
        return coerce_multi_line(block);
    }
    let Some(caps) = QUOTE_BLOCK_RE.captures(block) else {
        return coerce_multi_line(block);
    };
    let content = align_quote(&caps[2], selected);
    coerce_multi_line(&[&caps[1], content.as_str(), &caps[3]].join("\n"))
}
