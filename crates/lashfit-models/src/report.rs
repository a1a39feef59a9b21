//! The serialized analysis report returned to API consumers.
//!
//! Field names are part of the wire contract with existing frontends and
//! must not change (`scale_based_on_IPD_mm` included).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::features::{EyeFeatures, EyeProjection, EyelidExposure, SymmetryScore};
use crate::recommendation::{CurlCategory, LashRecommendation, LengthRange};
use crate::shape::EyeShape;

/// A per-eye value pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EyePair {
    pub left_eye: f64,
    pub right_eye: f64,
}

/// Per-eye hooded-lid flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HoodedEye {
    pub left: bool,
    pub right: bool,
}

/// The complete analysis record: measurements, classification, and the
/// lash-mapping plan. Built once per request; all numeric fields are
/// rounded for presentation here and nowhere earlier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    pub eye_shape: EyeShape,

    /// Width/height ratio, clamped to [1.0, 5.0].
    pub ratio: f64,

    pub tilt_angle_deg: f64,

    pub openness_mm: f64,

    pub eyelid_exposure: EyelidExposure,

    pub symmetry_score: SymmetryScore,

    pub projection_type: EyeProjection,

    #[serde(rename = "scale_based_on_IPD_mm")]
    pub mm_scale: f64,

    pub lash_fit_length_mm: EyePair,

    pub hooded_eye: HoodedEye,

    pub recommended_style: String,

    pub recommended_curl: CurlCategory,

    pub recommended_lengths_mm: LengthRange,

    pub description: String,

    pub notes: String,

    /// Raw per-eye widths in normalized units; debug output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_widths: Option<EyePair>,

    /// Raw per-eye heights in normalized units; debug output only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_heights: Option<EyePair>,
}

impl AnalysisReport {
    /// Assemble the report from the feature bundle and the recommendation.
    ///
    /// `debug` controls whether the raw normalized measurements are
    /// included alongside the derived values.
    pub fn new(features: &EyeFeatures, plan: LashRecommendation, debug: bool) -> Self {
        Self {
            eye_shape: plan.eye_shape,
            ratio: round_to(features.ratio, 2),
            tilt_angle_deg: round_to(features.tilt_angle, 2),
            openness_mm: round_to(features.openness_mm, 1),
            eyelid_exposure: features.eyelid_exposure,
            symmetry_score: features.symmetry,
            projection_type: features.projection,
            mm_scale: round_to(features.mm_scale, 2),
            lash_fit_length_mm: EyePair {
                left_eye: round_to(features.left.lash_fit_mm, 1),
                right_eye: round_to(features.right.lash_fit_mm, 1),
            },
            hooded_eye: HoodedEye {
                left: features.hooded_left,
                right: features.hooded_right,
            },
            recommended_style: plan.recommended_style,
            recommended_curl: plan.recommended_curl,
            recommended_lengths_mm: plan.recommended_lengths_mm,
            description: plan.description,
            notes: plan.notes,
            raw_widths: debug.then(|| EyePair {
                left_eye: round_to(features.left.width, 3),
                right_eye: round_to(features.right.width, 3),
            }),
            raw_heights: debug.then(|| EyePair {
                left_eye: round_to(features.left.height, 3),
                right_eye: round_to(features.right.height, 3),
            }),
        }
    }
}

/// Round to a fixed number of decimal places for presentation.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::EyeMeasurements;

    fn sample_features() -> EyeFeatures {
        EyeFeatures {
            left: EyeMeasurements {
                width: 0.12345,
                height: 0.0456,
                lash_fit_mm: 11.26,
            },
            right: EyeMeasurements {
                width: 0.11987,
                height: 0.0441,
                lash_fit_mm: 10.94,
            },
            interpupillary: 0.31,
            mm_scale: 203.226,
            ratio: 2.714,
            openness_mm: 9.113,
            tilt_angle: 1.337,
            eyelid_exposure: EyelidExposure::High,
            symmetry: SymmetryScore::Balanced,
            projection: EyeProjection::AverageDepth,
            hooded_left: false,
            hooded_right: true,
        }
    }

    fn sample_plan() -> LashRecommendation {
        LashRecommendation {
            eye_shape: EyeShape::Almond,
            recommended_style: "Cat-Eye or Natural Sweep".to_string(),
            recommended_curl: CurlCategory::Gentle,
            recommended_lengths_mm: LengthRange::Long,
            description: "Enhances natural symmetry and elongates outer corners.".to_string(),
            notes: "Average Depth, High lid exposure, Balanced alignment".to_string(),
        }
    }

    #[test]
    fn test_rounding() {
        let report = AnalysisReport::new(&sample_features(), sample_plan(), false);
        assert_eq!(report.ratio, 2.71);
        assert_eq!(report.tilt_angle_deg, 1.34);
        assert_eq!(report.openness_mm, 9.1);
        assert_eq!(report.mm_scale, 203.23);
        assert_eq!(report.lash_fit_length_mm.left_eye, 11.3);
        assert_eq!(report.lash_fit_length_mm.right_eye, 10.9);
        assert!(report.raw_widths.is_none());
        assert!(report.raw_heights.is_none());
    }

    #[test]
    fn test_debug_includes_raw_measurements() {
        let report = AnalysisReport::new(&sample_features(), sample_plan(), true);
        let widths = report.raw_widths.unwrap();
        assert_eq!(widths.left_eye, 0.123);
        assert_eq!(widths.right_eye, 0.12);
        assert_eq!(report.raw_heights.unwrap().left_eye, 0.046);
    }

    #[test]
    fn test_wire_field_names() {
        let report = AnalysisReport::new(&sample_features(), sample_plan(), false);
        let value = serde_json::to_value(&report).unwrap();
        let obj = value.as_object().unwrap();

        for key in [
            "eye_shape",
            "ratio",
            "tilt_angle_deg",
            "openness_mm",
            "eyelid_exposure",
            "symmetry_score",
            "projection_type",
            "scale_based_on_IPD_mm",
            "lash_fit_length_mm",
            "hooded_eye",
            "recommended_style",
            "recommended_curl",
            "recommended_lengths_mm",
            "description",
            "notes",
        ] {
            assert!(obj.contains_key(key), "missing wire field {key}");
        }

        assert_eq!(value["eye_shape"], "Almond Eyes");
        assert_eq!(value["recommended_curl"], "C Curl");
        assert_eq!(value["recommended_lengths_mm"], "10–13 mm");
        assert_eq!(value["lash_fit_length_mm"]["left_eye"], 11.3);
        assert_eq!(value["hooded_eye"]["right"], true);
        // debug-only fields stay off the wire when absent
        assert!(!obj.contains_key("raw_widths"));
    }
}
