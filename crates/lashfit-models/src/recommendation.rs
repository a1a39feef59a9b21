//! Lash-mapping recommendation types.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::shape::EyeShape;

/// Recommended lash curl category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CurlCategory {
    /// The most dramatic curl, lifting lashes out of a deep socket or a
    /// low lid.
    #[serde(rename = "L or M Curl")]
    Lifting,

    /// Balanced curl for average lid space.
    #[serde(rename = "CC or D Curl")]
    Balanced,

    /// The gentlest curl, avoiding over-curl on high lids or prominent eyes.
    #[serde(rename = "C Curl")]
    Gentle,
}

impl CurlCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurlCategory::Lifting => "L or M Curl",
            CurlCategory::Balanced => "CC or D Curl",
            CurlCategory::Gentle => "C Curl",
        }
    }
}

impl fmt::Display for CurlCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recommended lash length interval, millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum LengthRange {
    /// Conservative lengths for smaller eyes.
    #[serde(rename = "8–10 mm")]
    Short,

    #[serde(rename = "9–12 mm")]
    Medium,

    /// For larger or very open eyes.
    #[serde(rename = "10–13 mm")]
    Long,
}

impl LengthRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthRange::Short => "8–10 mm",
            LengthRange::Medium => "9–12 mm",
            LengthRange::Long => "10–13 mm",
        }
    }

    /// Interval bounds in millimeters.
    pub fn bounds_mm(&self) -> (f64, f64) {
        match self {
            LengthRange::Short => (8.0, 10.0),
            LengthRange::Medium => (9.0, 12.0),
            LengthRange::Long => (10.0, 13.0),
        }
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A complete lash-mapping plan for one analyzed face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LashRecommendation {
    pub eye_shape: EyeShape,

    /// Base style from the shape lookup, possibly annotated for tilt or
    /// hooded lids.
    pub recommended_style: String,

    pub recommended_curl: CurlCategory,

    pub recommended_lengths_mm: LengthRange,

    /// Human-readable rationale, possibly extended with balancing notes.
    pub description: String,

    /// One-line summary of the auxiliary features that drove the plan.
    pub notes: String,
}
