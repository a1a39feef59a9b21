//! Geometric eye features and their categorical buckets.
//!
//! The extractor fills one [`EyeFeatures`] bundle per analyzed face. All
//! numeric fields are unrounded working values; presentation rounding
//! happens only when the report is built.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raw measurements for a single eye, in normalized coordinate units
/// (except `lash_fit_mm`, already scaled to millimeters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EyeMeasurements {
    /// Outer-corner to inner-corner distance.
    pub width: f64,
    /// Vertical gap between upper and lower lid midpoints.
    pub height: f64,
    /// Recommended physical lash length for this eye, in millimeters.
    pub lash_fit_mm: f64,
}

/// How much eyelid skin is visible above the lash line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EyelidExposure {
    Low,
    Moderate,
    High,
}

impl EyelidExposure {
    /// All exposure categories.
    pub const ALL: &'static [EyelidExposure] = &[
        EyelidExposure::Low,
        EyelidExposure::Moderate,
        EyelidExposure::High,
    ];

    /// Bucket an openness estimate (millimeters). Boundaries are exclusive
    /// on the low side: exactly 6.0 is Moderate, exactly 9.0 is High.
    pub fn from_openness_mm(openness_mm: f64) -> Self {
        if openness_mm < 6.0 {
            EyelidExposure::Low
        } else if openness_mm < 9.0 {
            EyelidExposure::Moderate
        } else {
            EyelidExposure::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EyelidExposure::Low => "Low",
            EyelidExposure::Moderate => "Moderate",
            EyelidExposure::High => "High",
        }
    }
}

impl fmt::Display for EyelidExposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Corner-height alignment between the two eyes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SymmetryScore {
    Balanced,
    #[serde(rename = "Slight Asymmetry")]
    SlightAsymmetry,
    #[serde(rename = "Visible Asymmetry")]
    VisibleAsymmetry,
}

impl SymmetryScore {
    /// All symmetry categories.
    pub const ALL: &'static [SymmetryScore] = &[
        SymmetryScore::Balanced,
        SymmetryScore::SlightAsymmetry,
        SymmetryScore::VisibleAsymmetry,
    ];

    /// Bucket the corner-offset asymmetry value. Strict `<` comparisons:
    /// exactly 1.5 is already Slight Asymmetry.
    pub fn from_offset(asymmetry: f64) -> Self {
        if asymmetry < 1.5 {
            SymmetryScore::Balanced
        } else if asymmetry < 3.0 {
            SymmetryScore::SlightAsymmetry
        } else {
            SymmetryScore::VisibleAsymmetry
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SymmetryScore::Balanced => "Balanced",
            SymmetryScore::SlightAsymmetry => "Slight Asymmetry",
            SymmetryScore::VisibleAsymmetry => "Visible Asymmetry",
        }
    }

    /// True for any non-balanced alignment.
    pub fn is_asymmetric(&self) -> bool {
        !matches!(self, SymmetryScore::Balanced)
    }
}

impl fmt::Display for SymmetryScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimated depth of the eye within the socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EyeProjection {
    #[serde(rename = "Deep Set")]
    DeepSet,
    #[serde(rename = "Average Depth")]
    AverageDepth,
    #[serde(rename = "Projected / Prominent")]
    Prominent,
}

impl EyeProjection {
    /// All projection categories.
    pub const ALL: &'static [EyeProjection] = &[
        EyeProjection::DeepSet,
        EyeProjection::AverageDepth,
        EyeProjection::Prominent,
    ];

    /// Bucket the width-to-interpupillary projection ratio.
    pub fn from_projection_ratio(ratio: f64) -> Self {
        if ratio < 40.0 {
            EyeProjection::DeepSet
        } else if ratio < 50.0 {
            EyeProjection::AverageDepth
        } else {
            EyeProjection::Prominent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EyeProjection::DeepSet => "Deep Set",
            EyeProjection::AverageDepth => "Average Depth",
            EyeProjection::Prominent => "Projected / Prominent",
        }
    }
}

impl fmt::Display for EyeProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The full feature bundle for one analyzed face.
///
/// Constructed once per request by the extractor, consumed by the classifier
/// and recommender, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EyeFeatures {
    pub left: EyeMeasurements,
    pub right: EyeMeasurements,

    /// Inner-corner to inner-corner distance, normalized units.
    pub interpupillary: f64,
    /// Millimeters per normalized unit (63mm average IPD / measured IPD).
    /// Always positive; 1.0 when the measured IPD is degenerate.
    pub mm_scale: f64,

    /// Width/height ratio averaged across both eyes, clamped to [1.0, 5.0].
    pub ratio: f64,
    /// Estimated visible lid gap, millimeters.
    pub openness_mm: f64,
    /// Canthal-tilt proxy; positive means outer corners sit lower than
    /// inner corners in image space.
    pub tilt_angle: f64,

    pub eyelid_exposure: EyelidExposure,
    pub symmetry: SymmetryScore,
    pub projection: EyeProjection,

    /// Per-eye hooded-lid flags (brow-to-lid fold shorter than half the
    /// visible lid height).
    pub hooded_left: bool,
    pub hooded_right: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exposure_boundaries() {
        assert_eq!(EyelidExposure::from_openness_mm(5.9), EyelidExposure::Low);
        // 6.0 is Moderate: the Low bucket is strictly < 6
        assert_eq!(EyelidExposure::from_openness_mm(6.0), EyelidExposure::Moderate);
        assert_eq!(EyelidExposure::from_openness_mm(8.99), EyelidExposure::Moderate);
        assert_eq!(EyelidExposure::from_openness_mm(9.0), EyelidExposure::High);
    }

    #[test]
    fn test_symmetry_boundaries() {
        assert_eq!(SymmetryScore::from_offset(0.0), SymmetryScore::Balanced);
        assert_eq!(SymmetryScore::from_offset(1.49), SymmetryScore::Balanced);
        // 1.5 falls into Slight Asymmetry: strict < comparisons
        assert_eq!(SymmetryScore::from_offset(1.5), SymmetryScore::SlightAsymmetry);
        assert_eq!(SymmetryScore::from_offset(3.0), SymmetryScore::VisibleAsymmetry);
        assert!(SymmetryScore::from_offset(1.5).is_asymmetric());
        assert!(!SymmetryScore::from_offset(0.5).is_asymmetric());
    }

    #[test]
    fn test_projection_boundaries() {
        assert_eq!(EyeProjection::from_projection_ratio(39.9), EyeProjection::DeepSet);
        assert_eq!(EyeProjection::from_projection_ratio(40.0), EyeProjection::AverageDepth);
        assert_eq!(EyeProjection::from_projection_ratio(50.0), EyeProjection::Prominent);
    }

    #[test]
    fn test_label_strings() {
        assert_eq!(EyeProjection::Prominent.to_string(), "Projected / Prominent");
        assert_eq!(SymmetryScore::SlightAsymmetry.to_string(), "Slight Asymmetry");
        assert_eq!(EyelidExposure::Moderate.to_string(), "Moderate");
    }

    #[test]
    fn test_serde_labels_match_display() {
        let json = serde_json::to_string(&EyeProjection::Prominent).unwrap();
        assert_eq!(json, "\"Projected / Prominent\"");
        let json = serde_json::to_string(&SymmetryScore::VisibleAsymmetry).unwrap();
        assert_eq!(json, "\"Visible Asymmetry\"");
    }
}
