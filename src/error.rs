//! Reasons an alignment abstains.

use thiserror::Error;

/// Why [`try_align_quote`](crate::try_align_quote) could not produce a span.
///
/// Callers of [`align_quote`](crate::align_quote) never see this: every
/// variant collapses to the trimmed plain fragment.
#[derive(Debug, Error)]
pub enum AlignError {
    /// The fragment pattern failed to build or ran past its backtrack limit.
    #[error("fragment pattern failed: {0}")]
    Pattern(#[from] fancy_regex::Error),
    /// The selection has nothing but whitespace.
    #[error("fragment is blank")]
    BlankFragment,
    /// Nothing in the rich text renders to the fragment.
    #[error("fragment not found in rich text")]
    NoMatch,
    /// The repaired span, of the given byte length, failed the structural
    /// balance check.
    #[error("repaired span of {0} bytes is unbalanced")]
    Unbalanced(usize),
}
