//! Helper macros used across the crate.

/// Lazily compile a regex with a custom panic message.
///
/// The `Regex` in scope at the call site decides the engine, so the same
/// macro serves both `regex::Regex` and `fancy_regex::Regex` statics.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static RE: LazyLock<Regex> = quotealign::lazy_regex!(r"\[/\w+\]", "end tag");
/// assert!(RE.is_match("[/b]"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
