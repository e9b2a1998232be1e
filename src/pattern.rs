//! Compile a plain fragment into a pattern over the rich text.
//!
//! Every run of characters the rendering may have dropped or altered
//! (tags, link targets, punctuation, whitespace) becomes a wildcard that
//! accepts any mix of the same in the rich text. Letters and digits stay
//! literal. Optional groups on both ends let the match swallow adjoining
//! opening markup and closing markup without a repair pass.

use std::sync::LazyLock;

use fancy_regex::{Regex, RegexBuilder};

use crate::{
    lazy_regex,
    tags::{END_TAG, MD_LINK_TAIL, NON_ALPHANUMERIC, START_TAG, tag_source},
};

/// Backtracking budget for one search; exceeding it aborts the alignment.
pub const BACKTRACK_LIMIT: usize = 1_000_000;

static IGNORER_RE: LazyLock<Regex> = lazy_regex!(&ignorer_source(), "valid ignorer regex");

fn ignorer_source() -> String {
    format!("(?:{}|{MD_LINK_TAIL}|{NON_ALPHANUMERIC})+", tag_source())
}

fn leading_source() -> String {
    format!(r"(?:{START_TAG}|\p{{P}})*")
}

fn trailing_source() -> String {
    format!("(?:{END_TAG}|{MD_LINK_TAIL}|[_*~]+)*")
}

/// Build the pattern source for `fragment`.
///
/// # Errors
/// Returns an error if scanning the fragment exceeds the backtrack limit.
pub fn fragment_source(fragment: &str) -> Result<String, fancy_regex::Error> {
    let ignorer = ignorer_source();
    let mut out = leading_source();
    let mut last = 0;
    for found in IGNORER_RE.find_iter(fragment) {
        let found = found?;
        out.push_str(&regex::escape(&fragment[last..found.start()]));
        out.push_str(&ignorer);
        last = found.end();
    }
    out.push_str(&regex::escape(&fragment[last..]));
    out.push_str(&trailing_source());
    Ok(out)
}

/// Compile `fragment` into a first-match search pattern with a bounded
/// backtrack budget.
///
/// # Errors
/// Returns an error if the pattern cannot be built.
pub fn compile_fragment(fragment: &str) -> Result<Regex, fancy_regex::Error> {
    let source = fragment_source(fragment)?;
    RegexBuilder::new(&source)
        .backtrack_limit(BACKTRACK_LIMIT)
        .build()
}
