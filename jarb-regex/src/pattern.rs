use crate::error::{PatternError, PatternResult};
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::num::NonZeroU32;

/// A pattern accepting optionally negative decimal numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberPattern {
    /// One or more digits, no fraction: `^-?\d+$`.
    Whole,
    /// One or more digits, optionally followed by `.` and 1 to `digits`
    /// fraction digits: `^-?\d+(\.\d{1,N})?$`.
    Fraction { digits: NonZeroU32 },
}

impl NumberPattern {
    pub const fn whole() -> Self {
        NumberPattern::Whole
    }

    /// A pattern allowing up to `digits` digits behind the decimal point.
    ///
    /// Zero and precisions beyond `u32::MAX` are rejected.
    pub fn fraction(digits: u64) -> PatternResult<Self> {
        u32::try_from(digits)
            .ok()
            .and_then(NonZeroU32::new)
            .map(|digits| NumberPattern::Fraction { digits })
            .ok_or_else(|| {
                PatternError::InvalidArgument(format!(
                    "fraction digits must be between 1 and {}, got {digits}",
                    u32::MAX
                ))
            })
    }

    /// Number of fraction digits accepted; zero for [`NumberPattern::Whole`].
    pub fn fraction_digits(&self) -> u32 {
        match self {
            NumberPattern::Whole => 0,
            NumberPattern::Fraction { digits } => digits.get(),
        }
    }

    /// The bare expression text a renderer's `pattern` option takes.
    pub fn as_pattern_string(&self) -> String {
        match self {
            NumberPattern::Whole => r"^-?\d+$".to_string(),
            NumberPattern::Fraction { digits } => format!(r"^-?\d+(\.\d{{1,{digits}}})?$"),
        }
    }

    /// Compiles the pattern for matching. `\d` only matches ASCII digits,
    /// as in the renderer's own pattern check.
    pub fn to_regex(&self) -> PatternResult<Regex> {
        Ok(RegexBuilder::new(&self.as_pattern_string())
            .unicode(false)
            .build()?)
    }
}

impl fmt::Display for NumberPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_pattern_string())
    }
}
