use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which name format to produce.
///
/// Parsing ignores case and surrounding whitespace, both from strings and
/// when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum NameStyle {
    /// "John Junior Smith"
    #[default]
    Full,
    /// "John J Smith"
    MiddleInitial,
    /// "J J S"
    Initials,
}

impl NameStyle {
    pub const ALL: [NameStyle; 3] = [
        NameStyle::Full,
        NameStyle::MiddleInitial,
        NameStyle::Initials,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameStyle::Full => "full",
            NameStyle::MiddleInitial => "middle-initial",
            NameStyle::Initials => "initials",
        }
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        NameStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == wanted)
            .ok_or_else(|| {
                AppError::config_error(format!(
                    "Unknown name style '{s}', expected one of: full, middle-initial, initials"
                ))
            })
    }
}

impl TryFrom<String> for NameStyle {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
