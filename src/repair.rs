//! Grow a located span so tags at its edges keep their partners.
//!
//! Three passes run in order, each extending the span outward:
//!
//! 1. end tags at the start of the span pull in their start tags from the
//!    text before it;
//! 2. start tags at the end of the span pull in their end tags from the
//!    text after it;
//! 3. remaining start tags before the span that pair positionally with end
//!    tags after it wrap the whole span.
//!
//! Every pass stops at the first position that fails to pair. Partners are
//! concatenated directly onto the span, so text between a partner and the
//! span is left out: the quote keeps the formatting, not the neighbouring
//! words.

use crate::tags::{scan_tags, tags_pair};

/// Repair orphaned tags at the edges of `matched`.
///
/// `before` and `after` are the rich text on either side of the match.
///
/// # Errors
/// Returns an error if tag scanning exceeds the backtrack limit.
pub fn repair_tags(matched: &str, before: &str, after: &str) -> Result<String, fancy_regex::Error> {
    let within = scan_tags(matched)?;
    let mut before_tags = scan_tags(before)?;
    // closest to the match first
    before_tags.reverse();
    let after_tags = scan_tags(after)?;

    let mut head: Vec<&str> = Vec::new();
    let mut tail: Vec<&str> = Vec::new();

    let mut used_before = 0;
    for tag in &within {
        let partner = before_tags.get(used_before);
        if !(tag.is_end() && tags_pair(Some(tag), partner)) {
            break;
        }
        head.push(before_tags[used_before].as_str());
        used_before += 1;
    }

    let mut used_after = 0;
    for tag in within.iter().rev() {
        let partner = after_tags.get(used_after);
        if !(tag.is_start() && tags_pair(Some(tag), partner)) {
            break;
        }
        tail.push(after_tags[used_after].as_str());
        used_after += 1;
    }

    let enclosing_after = &after_tags[used_after..];
    for (idx, tag) in before_tags[used_before..].iter().enumerate() {
        if !(tag.is_start() && tags_pair(Some(tag), enclosing_after.get(idx))) {
            break;
        }
        head.push(tag.as_str());
        tail.push(enclosing_after[idx].as_str());
    }

    Ok(assemble(&head, matched, &tail))
}

/// `head` holds prefixes in the order they were prepended.
fn assemble(head: &[&str], matched: &str, tail: &[&str]) -> String {
    let mut out = String::with_capacity(
        matched.len() + head.iter().chain(tail).map(|s| s.len()).sum::<usize>(),
    );
    for prefix in head.iter().rev() {
        out.push_str(prefix);
    }
    out.push_str(matched);
    for suffix in tail {
        out.push_str(suffix);
    }
    out
}
