//! CEFR proficiency levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common European Framework of Reference proficiency tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    /// All levels from easiest to hardest.
    pub const ALL: [Self; 6] = [Self::A1, Self::A2, Self::B1, Self::B2, Self::C1, Self::C2];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::C1 => "C1",
            Self::C2 => "C2",
        }
    }

    /// Band name: basic (A), independent (B) or proficient (C).
    #[must_use]
    pub const fn band(self) -> &'static str {
        match self {
            Self::A1 | Self::A2 => "basic",
            Self::B1 | Self::B2 => "independent",
            Self::C1 | Self::C2 => "proficient",
        }
    }

    /// Parse a free-form label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CefrLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| format!("unknown CEFR level: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!(CefrLevel::from_label("b1"), Some(CefrLevel::B1));
        assert_eq!(CefrLevel::from_label(" C2 "), Some(CefrLevel::C2));
        assert_eq!(CefrLevel::from_label("D1"), None);
        assert_eq!(CefrLevel::from_label(""), None);
    }

    #[test]
    fn test_ordering_follows_difficulty() {
        assert!(CefrLevel::A1 < CefrLevel::A2);
        assert!(CefrLevel::B2 < CefrLevel::C1);
        assert_eq!(CefrLevel::ALL.iter().max(), Some(&CefrLevel::C2));
    }

    #[test]
    fn test_band() {
        assert_eq!(CefrLevel::A2.band(), "basic");
        assert_eq!(CefrLevel::B1.band(), "independent");
        assert_eq!(CefrLevel::C1.band(), "proficient");
    }
}
