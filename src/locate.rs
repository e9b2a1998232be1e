//! Find the first rich-text span a compiled fragment pattern matches.

use fancy_regex::Regex;

/// Half-open byte range `[start, end)` into the rich text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    /// First byte of the match.
    pub start: usize,
    /// One past the last byte of the match.
    pub end: usize,
}

impl MatchSpan {
    /// The rich text preceding the match.
    #[must_use]
    pub fn before<'a>(&self, rich: &'a str) -> &'a str {
        &rich[..self.start]
    }

    /// The rich text following the match.
    #[must_use]
    pub fn after<'a>(&self, rich: &'a str) -> &'a str {
        &rich[self.end..]
    }
}

/// A located span together with the text on either side of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located<'a> {
    /// Raw bounds of the match, before trimming.
    pub span: MatchSpan,
    /// The matched text with surrounding whitespace trimmed.
    pub matched: &'a str,
    /// Rich text up to `span.start`.
    pub before: &'a str,
    /// Rich text from `span.end` on.
    pub after: &'a str,
}

/// Apply `pattern` once to `rich`.
///
/// Returns `None` when nothing matches or the match is only whitespace.
///
/// # Errors
/// Returns an error if the search exceeds the pattern's backtrack limit.
pub fn locate<'a>(pattern: &Regex, rich: &'a str) -> Result<Option<Located<'a>>, fancy_regex::Error> {
    let Some(found) = pattern.find(rich)? else {
        return Ok(None);
    };
    let matched = found.as_str().trim();
    if matched.is_empty() {
        return Ok(None);
    }
    let span = MatchSpan {
        start: found.start(),
        end: found.end(),
    };
    Ok(Some(Located {
        span,
        matched,
        before: span.before(rich),
        after: span.after(rich),
    }))
}
