//! Input widget kinds and their specificity ordering.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An `<input>` widget kind a property can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    Color,
    DatetimeLocal,
    Datetime,
    Month,
    Week,
    Date,
    Time,
    Email,
    Tel,
    Number,
    Url,
    Password,
    File,
    Image,
    Text,
}

impl InputKind {
    /// Every kind, most specific first.
    pub const PRIORITY: [InputKind; 15] = [
        InputKind::Color,
        InputKind::DatetimeLocal,
        InputKind::Datetime,
        InputKind::Month,
        InputKind::Week,
        InputKind::Date,
        InputKind::Time,
        InputKind::Email,
        InputKind::Tel,
        InputKind::Number,
        InputKind::Url,
        InputKind::Password,
        InputKind::File,
        InputKind::Image,
        InputKind::Text,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            InputKind::Color => "color",
            InputKind::DatetimeLocal => "datetime-local",
            InputKind::Datetime => "datetime",
            InputKind::Month => "month",
            InputKind::Week => "week",
            InputKind::Date => "date",
            InputKind::Time => "time",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Number => "number",
            InputKind::Url => "url",
            InputKind::Password => "password",
            InputKind::File => "file",
            InputKind::Image => "image",
            InputKind::Text => "text",
        }
    }

    /// Picks the most specific kind named in `kinds`.
    ///
    /// The priority order decides, not the order of `kinds`: `["text", "email"]`
    /// resolves to [`InputKind::Email`]. Empty input, or input naming no known
    /// kind, resolves to [`InputKind::Text`].
    pub fn most_specific<S: AsRef<str>>(kinds: &[S]) -> InputKind {
        Self::PRIORITY
            .into_iter()
            .find(|candidate| kinds.iter().any(|k| k.as_ref() == candidate.as_str()))
            .unwrap_or(InputKind::Text)
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PRIORITY
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown input kind: {s}")))
    }
}
