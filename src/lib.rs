//! Recover the marked-up source behind a plain-text selection.
//!
//! A reader selects rendered text in a forum post; this crate finds the span
//! of the post's BBCode/Markdown source that renders to that selection and
//! grows it so the excerpt stays well-formed when pasted into a new quote.
//! When the recovered span would be unbalanced, the plain selection is
//! returned instead.

mod macros;

pub mod align;
pub mod error;
pub mod locate;
pub mod markdown;
pub mod multiline;
pub mod pattern;
pub mod quote;
pub mod repair;
pub mod sanity;
pub mod tags;

pub use align::{align_quote, excerpt, try_align_quote};
pub use error::AlignError;
pub use multiline::coerce_multi_line;
pub use quote::{is_quote_block, quote_to_partial};
