//! Plain-to-rich alignment.
//!
//! The stages run in one direction: compile the fragment, locate it, repair
//! tags at the edges, fix Markdown edges, trim marker-only lines, then gate
//! the result on [`is_balanced`]. Any failure along the way abstains to the
//! trimmed plain fragment.

use log::{debug, warn};

use crate::{
    error::AlignError,
    locate::locate,
    markdown::{carry_block_marker, complete_link, trim_marker_lines},
    pattern::compile_fragment,
    repair::repair_tags,
    sanity::is_balanced,
};

/// Recover the rich-text span behind `plain_fragment`.
///
/// # Errors
/// Returns [`AlignError`] describing why alignment abstained.
pub fn try_align_quote(rich_text: &str, plain_fragment: &str) -> Result<String, AlignError> {
    if plain_fragment.trim().is_empty() {
        return Err(AlignError::BlankFragment);
    }
    let pattern = compile_fragment(plain_fragment)?;
    let found = locate(&pattern, rich_text)?.ok_or(AlignError::NoMatch)?;

    let repaired = repair_tags(found.matched, found.before, found.after)?;
    let mut extended = complete_link(repaired, found.after);
    if let Some(marker) = carry_block_marker(found.before) {
        extended.insert_str(0, marker);
    }
    let result = trim_marker_lines(&extended);

    if is_balanced(&result)? {
        Ok(result.trim().to_string())
    } else {
        Err(AlignError::Unbalanced(result.len()))
    }
}

/// Recover the rich-text span behind `plain_fragment`, falling back to the
/// trimmed fragment whenever alignment abstains.
///
/// # Examples
///
/// ```
/// use quotealign::align_quote;
///
/// let quoted = align_quote("before [b]hello world[/b] after", "hello world");
/// assert_eq!(quoted, "[b]hello world[/b]");
/// ```
#[must_use]
pub fn align_quote(rich_text: &str, plain_fragment: &str) -> String {
    match try_align_quote(rich_text, plain_fragment) {
        Ok(aligned) => aligned,
        Err(err @ AlignError::Pattern(_)) => {
            warn!("falling back to plain selection: {err}");
            plain_fragment.trim().to_string()
        }
        Err(err) => {
            debug!("falling back to plain selection: {err}");
            plain_fragment.trim().to_string()
        }
    }
}

/// Quote `selected` out of `rich_text`, or all of it when nothing is selected.
#[must_use]
pub fn excerpt(rich_text: &str, selected: &str) -> String {
    if selected.trim().is_empty() {
        rich_text.trim().to_string()
    } else {
        align_quote(rich_text, selected)
    }
}
