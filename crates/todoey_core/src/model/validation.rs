//! Write/read validation errors for domain records.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A record that violates a model invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    BlankCategoryName,
    BlankItemTitle,
    /// Color tags must be `#RRGGBB`.
    InvalidColorTag(String),
    NegativeTimestamp {
        field: &'static str,
        value: i64,
    },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankCategoryName => write!(f, "category name cannot be blank"),
            Self::BlankItemTitle => write!(f, "item title cannot be blank"),
            Self::InvalidColorTag(value) => {
                write!(f, "invalid color tag `{value}`; expected #RRGGBB")
            }
            Self::NegativeTimestamp { field, value } => {
                write!(f, "{field} must be a non-negative epoch timestamp, got {value}")
            }
        }
    }
}

impl Error for ValidationError {}
