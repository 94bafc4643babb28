//! Numeric input patterns.
//!
//! Renderers validate number inputs against a pattern string. This crate
//! builds those patterns:
//! - [`NumberPattern::whole`] — an optionally negative whole number
//! - [`NumberPattern::fraction`] — a number with up to N digits behind the decimal point
//!
//! A pattern's [`Display`](std::fmt::Display) form is the bare expression the
//! renderer expects (`^-?\d+$`), without delimiters.

mod error;
mod pattern;

pub use error::{PatternError, PatternResult};
pub use pattern::NumberPattern;
