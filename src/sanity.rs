//! Structural balance check gating every repaired span.

use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::lazy_regex;

/// Opening parenthesis not directly after the emoticon prefix `;:-`.
static OPEN_PAREN_RE: LazyLock<Regex> = lazy_regex!(r"(?<!;:-)\(", "valid paren regex");
static CLOSE_PAREN_RE: LazyLock<Regex> = lazy_regex!(r"\)", "valid paren regex");
static OPEN_BRACKET_RE: LazyLock<Regex> = lazy_regex!(r"(?<!;:-)\[", "valid bracket regex");
static CLOSE_BRACKET_RE: LazyLock<Regex> = lazy_regex!(r"\]", "valid bracket regex");

/// Opening and closing emphasis runs of three, two and one `_`/`*`.
static EMPHASIS_RES: LazyLock<[(Regex, Regex); 3]> = LazyLock::new(|| {
    [3, 2, 1].map(|len| {
        let open = Regex::new(&format!(r"[_*]{{{len}}}\p{{L}}")).expect("valid emphasis regex");
        let close = Regex::new(&format!(r"\p{{L}}[_*]{{{len}}}")).expect("valid emphasis regex");
        (open, close)
    })
});
static STRIKE_OPEN_RE: LazyLock<Regex> = lazy_regex!(r"~~\p{L}", "valid strikethrough regex");
static STRIKE_CLOSE_RE: LazyLock<Regex> = lazy_regex!(r"\p{L}~~", "valid strikethrough regex");

fn count(re: &Regex, text: &str) -> Result<usize, fancy_regex::Error> {
    re.find_iter(text).try_fold(0, |n, found| found.map(|_| n + 1))
}

fn same_count(open: &Regex, close: &Regex, text: &str) -> Result<bool, fancy_regex::Error> {
    Ok(count(open, text)? == count(close, text)?)
}

/// Whether `text` has balanced parentheses and brackets (ignoring those
/// after `;:-`) and paired emphasis and strikethrough markers.
///
/// # Errors
/// Returns an error if a look-behind search exceeds its backtrack limit.
pub fn is_balanced(text: &str) -> Result<bool, fancy_regex::Error> {
    if !same_count(&OPEN_PAREN_RE, &CLOSE_PAREN_RE, text)?
        || !same_count(&OPEN_BRACKET_RE, &CLOSE_BRACKET_RE, text)?
    {
        return Ok(false);
    }
    for (open, close) in EMPHASIS_RES.iter() {
        if !same_count(open, close, text)? {
            return Ok(false);
        }
    }
    same_count(&STRIKE_OPEN_RE, &STRIKE_CLOSE_RE, text)
}
