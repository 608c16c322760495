//! Display color tags for categories.
//!
//! # Invariants
//! - A `ColorTag` always holds `#` plus six uppercase hex digits.
//! - Random tags are drawn from [`FLAT_PALETTE`] only.

use crate::model::validation::ValidationError;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Flat UI palette used for new categories.
pub const FLAT_PALETTE: &[&str] = &[
    "#E74C3C", "#E67E22", "#FFCC00", "#F0DEB4", "#34495E", "#2B2B2B", "#9B59B6", "#3A6F81",
    "#3498DB", "#2ECC71", "#1ABC9C", "#ECF0F1", "#95A5A6", "#345F41", "#745EC5", "#5E4534",
    "#5E345E", "#EF717A", "#A5C63B", "#F47CC3", "#79302A", "#A38671", "#B8C9F1", "#5065A0",
];

/// Hex-encoded `#RRGGBB` display color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorTag(String);

impl ColorTag {
    /// Parses `#RRGGBB` or `RRGGBB` (any case) into a normalized tag.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidColorTag(raw.to_string()));
        }
        Ok(Self(format!("#{}", digits.to_ascii_uppercase())))
    }

    /// Picks a random palette color.
    pub fn random() -> Self {
        let hex = FLAT_PALETTE
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(FLAT_PALETTE[0]);
        Self(hex.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ColorTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ColorTag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ColorTag> for String {
    fn from(value: ColorTag) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorTag, FLAT_PALETTE};
    use crate::model::validation::ValidationError;

    #[test]
    fn parse_normalizes_prefix_and_case() {
        let tag = ColorTag::parse("e74c3c").unwrap();
        assert_eq!(tag.as_str(), "#E74C3C");
    }

    #[test]
    fn parse_rejects_malformed_values() {
        for raw in ["", "#12345", "#1234567", "#GG0000", "red"] {
            let err = ColorTag::parse(raw).unwrap_err();
            assert_eq!(err, ValidationError::InvalidColorTag(raw.to_string()));
        }
    }

    #[test]
    fn random_tags_come_from_palette() {
        for _ in 0..32 {
            let tag = ColorTag::random();
            assert!(FLAT_PALETTE.contains(&tag.as_str()));
        }
    }

    #[test]
    fn palette_entries_are_valid_tags() {
        for hex in FLAT_PALETTE {
            assert_eq!(ColorTag::parse(hex).unwrap().as_str(), *hex);
        }
    }
}
