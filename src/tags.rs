//! BBCode tag grammar.
//!
//! A start tag is `[` followed by anything except `/`, `]` or a newline and
//! then `]`; an end tag is `[/name]`. Neither counts when immediately
//! followed by `(`, since `[label](url)` is a Markdown link whose label only
//! looks like a tag. Tags are lexical tokens only: nothing here checks that
//! they nest.

use std::sync::LazyLock;

use fancy_regex::Regex;

use crate::lazy_regex;

/// `[b]`, `[url=...]`, `[tag attr=...]`
pub(crate) const START_TAG: &str = r"\[[^/\]\n]+\](?!\()";
/// `[/b]`, `[/url]`
pub(crate) const END_TAG: &str = r"\[/[A-Za-z0-9_]+\](?!\()";
/// `](https://example.com)`, the tail of `[text](url)` or `![alt](src)`.
pub(crate) const MD_LINK_TAIL: &str = r"\]\([^)]+\)";
pub(crate) const NON_ALPHANUMERIC: &str = r"[^\p{L}\p{N}]";

/// Either kind of tag, as a non-capturing group.
pub(crate) fn tag_source() -> String {
    format!("(?:{START_TAG}|{END_TAG})")
}

static TAG_RE: LazyLock<Regex> = lazy_regex!(&tag_source(), "valid tag regex");

/// Whether a tag opens (`[b]`) or closes (`[/b]`) a formatting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `[name ...]`
    Start,
    /// `[/name]`
    End,
}

/// A tag occurrence borrowed from the text it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    text: &'a str,
}

impl<'a> Tag<'a> {
    /// The tag exactly as it appears in the source.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Start or end tag, decided by a leading `[/`.
    #[must_use]
    pub fn kind(&self) -> TagKind {
        if self.text.starts_with("[/") {
            TagKind::End
        } else {
            TagKind::Start
        }
    }

    /// Shorthand for `kind() == TagKind::Start`.
    #[must_use]
    pub fn is_start(&self) -> bool {
        self.kind() == TagKind::Start
    }

    /// Shorthand for `kind() == TagKind::End`.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.kind() == TagKind::End
    }

    /// The tag name: the leading word characters of a start tag, or
    /// everything between `[/` and `]` of an end tag.
    ///
    /// Start tags such as `[=x]` have no name and never pair.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        let name = match self.kind() {
            TagKind::End => self
                .text
                .strip_prefix("[/")
                .and_then(|s| s.strip_suffix(']'))?,
            TagKind::Start => {
                let body = self.text.strip_prefix('[')?;
                let len = body
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or(body.len());
                &body[..len]
            }
        };
        (!name.is_empty()).then_some(name)
    }
}

/// Collect every tag in `text`, left to right.
///
/// # Errors
/// Returns an error if the look-ahead engine exceeds its backtrack limit.
pub fn scan_tags(text: &str) -> Result<Vec<Tag<'_>>, fancy_regex::Error> {
    TAG_RE
        .find_iter(text)
        .map(|m| m.map(|m| Tag { text: m.as_str() }))
        .collect()
}

/// Whether two tags form a start/end pair with the same name, in either order.
///
/// A missing partner never pairs.
#[must_use]
pub fn tags_pair(a: Option<&Tag<'_>>, b: Option<&Tag<'_>>) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    let (start, end) = match (a.kind(), b.kind()) {
        (TagKind::Start, TagKind::End) => (a, b),
        (TagKind::End, TagKind::Start) => (b, a),
        _ => return false,
    };
    start.name().is_some() && start.name() == end.name()
}
