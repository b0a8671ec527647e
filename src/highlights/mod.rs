//! Highlight reel selection.
//!
//! Scores each built segment as a standalone clip and derives three
//! capped, time-ordered highlight tiers from the ranking. Selection only
//! borrows segments; it never creates or alters them.

mod importance;
pub mod keywords;
mod selector;
mod timecode;

pub use importance::ImportanceScorer;
pub use selector::{Highlight, HighlightSelector, HighlightTier, Highlights};
pub use timecode::{Timecode, format_timecodes, parse_timecodes};
