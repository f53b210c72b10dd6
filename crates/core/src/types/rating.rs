//! Listing rating type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An average listing rating on the marketplace's five-star scale.
///
/// Construction clamps the value into `[0.0, 5.0]`, so a `Rating` read
/// from the Catalog Provider is always displayable as-is. Deserialization
/// goes through the same clamp.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(from = "f32", into = "f32")]
pub struct Rating(f32);

impl Rating {
    /// Maximum rating on the five-star scale.
    pub const MAX: f32 = 5.0;

    /// Create a rating, clamping into `[0.0, MAX]`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, Self::MAX))
    }

    /// The rating value.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.0
    }
}

impl From<f32> for Rating {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<Rating> for f32 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        assert!((Rating::new(4.8).value() - 4.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_new_clamps() {
        assert!((Rating::new(7.2).value() - 5.0).abs() < f32::EPSILON);
        assert!(Rating::new(-1.0).value().abs() < f32::EPSILON);
    }

    #[test]
    fn test_display_one_decimal() {
        assert_eq!(Rating::new(4.8).to_string(), "4.8");
        assert_eq!(Rating::new(5.0).to_string(), "5.0");
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_deserialize_clamps_out_of_range() {
        let rating: Rating = serde_json::from_str("7.5").unwrap();
        assert!((rating.value() - Rating::MAX).abs() < f32::EPSILON);

        let rating: Rating = serde_json::from_str("-2.0").unwrap();
        assert!(rating.value().abs() < f32::EPSILON);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_serde_roundtrip_is_plain_number() {
        let json = serde_json::to_string(&Rating::new(4.8)).unwrap();
        assert_eq!(json, "4.8");

        let parsed: Rating = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Rating::new(4.8));
    }
}
