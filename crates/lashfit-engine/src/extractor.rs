//! Geometric feature extraction from facial landmarks.
//!
//! All formulas operate in normalized image space; the interpupillary
//! distance anchors the conversion to millimeters (63mm average IPD).

use lashfit_models::{
    indices, EyeFeatures, EyeMeasurements, EyeProjection, EyelidExposure, FaceLandmarks,
    SymmetryScore,
};
use tracing::debug;

use crate::AnalysisError;

/// Average adult interpupillary distance, millimeters.
const AVERAGE_IPD_MM: f64 = 63.0;

/// Calibration constant converting normalized-space lid gap into an
/// approximate visible-lid-gap estimate in millimeters.
const OPENNESS_CALIBRATION: f64 = 100.0;

/// Canthal-tilt and symmetry offsets are amplified by the same factor so
/// their thresholds read in whole units.
const OFFSET_SCALE: f64 = 100.0;

/// Width/height ratios outside this band are landmark noise, not anatomy.
const RATIO_MIN: f64 = 1.0;
const RATIO_MAX: f64 = 5.0;

/// A brow-to-lid fold shorter than half the visible lid height reads as a
/// hooded lid.
const HOODED_FOLD_RATIO: f64 = 0.5;

/// Compute the feature bundle for a detected face.
///
/// Fails only when a required landmark index is absent (detector contract
/// violation). Degenerate geometry never fails: a zero interpupillary
/// distance falls back to scale 1.0, a single zero eye height defers to the
/// other eye, and the ratio clamp absorbs the rest.
pub fn extract_features(landmarks: &FaceLandmarks) -> Result<EyeFeatures, AnalysisError> {
    let left_outer = landmarks.require(indices::LEFT_EYE_OUTER)?;
    let left_inner = landmarks.require(indices::LEFT_EYE_INNER)?;
    let right_inner = landmarks.require(indices::RIGHT_EYE_INNER)?;
    let right_outer = landmarks.require(indices::RIGHT_EYE_OUTER)?;
    let left_upper = landmarks.require(indices::LEFT_UPPER_LID)?;
    let left_lower = landmarks.require(indices::LEFT_LOWER_LID)?;
    let right_upper = landmarks.require(indices::RIGHT_UPPER_LID)?;
    let right_lower = landmarks.require(indices::RIGHT_LOWER_LID)?;
    let left_brow = landmarks.require(indices::LEFT_BROW)?;
    let right_brow = landmarks.require(indices::RIGHT_BROW)?;

    let interpupillary = left_inner.distance_to(&right_inner);
    let mm_scale = if interpupillary > 0.0 {
        AVERAGE_IPD_MM / interpupillary
    } else {
        1.0
    };

    let left_width = left_outer.distance_to(&left_inner);
    let right_width = right_outer.distance_to(&right_inner);
    let avg_width = (left_width + right_width) / 2.0;

    let left_height = (left_upper.y - left_lower.y).abs();
    let right_height = (right_upper.y - right_lower.y).abs();
    // One collapsed lid is a detection glitch; averaging it in would halve
    // the real height, so the open eye stands alone.
    let avg_height = match (left_height > 0.0, right_height > 0.0) {
        (true, true) => (left_height + right_height) / 2.0,
        (true, false) => left_height,
        (false, true) => right_height,
        (false, false) => 0.0,
    };

    let raw_ratio = if avg_height > 0.0 {
        avg_width / avg_height
    } else {
        0.0
    };
    let ratio = raw_ratio.clamp(RATIO_MIN, RATIO_MAX);

    let openness_mm = avg_height * mm_scale * OPENNESS_CALIBRATION;

    let tilt_angle =
        ((left_outer.y - left_inner.y) + (right_outer.y - right_inner.y)) / 2.0 * OFFSET_SCALE;

    let asymmetry =
        ((left_outer.y - right_outer.y) - (left_inner.y - right_inner.y)).abs() * OFFSET_SCALE;

    let projection_ratio = if interpupillary > 0.0 {
        avg_width / interpupillary * OFFSET_SCALE
    } else {
        0.0
    };

    let hooded_left = is_hooded(left_brow.y, left_upper.y, left_lower.y);
    let hooded_right = is_hooded(right_brow.y, right_upper.y, right_lower.y);

    debug!(
        raw_ratio,
        ratio,
        openness_mm,
        tilt_angle,
        asymmetry,
        projection_ratio,
        mm_scale,
        "Extracted eye features"
    );

    Ok(EyeFeatures {
        left: EyeMeasurements {
            width: left_width,
            height: left_height,
            lash_fit_mm: left_width * mm_scale,
        },
        right: EyeMeasurements {
            width: right_width,
            height: right_height,
            lash_fit_mm: right_width * mm_scale,
        },
        interpupillary,
        mm_scale,
        ratio,
        openness_mm,
        tilt_angle,
        eyelid_exposure: EyelidExposure::from_openness_mm(openness_mm),
        symmetry: SymmetryScore::from_offset(asymmetry),
        projection: EyeProjection::from_projection_ratio(projection_ratio),
        hooded_left,
        hooded_right,
    })
}

/// Hooded-lid check: the fold between brow and upper lid is short relative
/// to the visible lid height. A collapsed lid never reads as hooded.
fn is_hooded(brow_y: f64, upper_lid_y: f64, lower_lid_y: f64) -> bool {
    let fold_height = (brow_y - upper_lid_y).abs();
    let visible_height = (upper_lid_y - lower_lid_y).abs();
    visible_height > 0.0 && fold_height / visible_height < HOODED_FOLD_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use lashfit_models::LandmarkPoint;

    fn face_with(points: &[(u32, f64, f64)]) -> FaceLandmarks {
        let mut face = FaceLandmarks::new();
        for &(idx, x, y) in points {
            face.insert(idx, LandmarkPoint::new(x, y));
        }
        face
    }

    fn base_face() -> FaceLandmarks {
        face_with(&[
            (indices::LEFT_EYE_OUTER, 0.20, 0.50),
            (indices::LEFT_EYE_INNER, 0.35, 0.50),
            (indices::RIGHT_EYE_INNER, 0.65, 0.50),
            (indices::RIGHT_EYE_OUTER, 0.80, 0.50),
            (indices::LEFT_UPPER_LID, 0.275, 0.47),
            (indices::LEFT_LOWER_LID, 0.275, 0.53),
            (indices::RIGHT_UPPER_LID, 0.725, 0.47),
            (indices::RIGHT_LOWER_LID, 0.725, 0.53),
            (indices::LEFT_BROW, 0.275, 0.40),
            (indices::RIGHT_BROW, 0.725, 0.40),
        ])
    }

    #[test]
    fn test_basic_measurements() {
        let features = extract_features(&base_face()).unwrap();

        assert!((features.interpupillary - 0.30).abs() < 1e-9);
        assert!((features.mm_scale - 210.0).abs() < 1e-9);
        assert!((features.left.width - 0.15).abs() < 1e-9);
        assert!((features.left.height - 0.06).abs() < 1e-9);
        // ratio 0.15 / 0.06 = 2.5, inside the clamp band
        assert!((features.ratio - 2.5).abs() < 1e-9);
        // openness 0.06 * 210 * 100
        assert!((features.openness_mm - 1260.0).abs() < 1e-6);
        assert!((features.left.lash_fit_mm - 31.5).abs() < 1e-9);
        assert_eq!(features.tilt_angle, 0.0);
        assert_eq!(features.symmetry, SymmetryScore::Balanced);
        // projection 0.15 / 0.30 * 100 = 50 -> prominent bucket
        assert_eq!(features.projection, EyeProjection::Prominent);
    }

    #[test]
    fn test_zero_interpupillary_scale_falls_back_to_one() {
        let mut face = base_face();
        // inner corners coincide
        face.insert(indices::LEFT_EYE_INNER, LandmarkPoint::new(0.5, 0.5));
        face.insert(indices::RIGHT_EYE_INNER, LandmarkPoint::new(0.5, 0.5));

        let features = extract_features(&face).unwrap();
        assert_eq!(features.mm_scale, 1.0);
        assert_eq!(features.projection, EyeProjection::DeepSet);
    }

    #[test]
    fn test_one_collapsed_lid_uses_other_eye_height() {
        let mut face = base_face();
        face.insert(indices::RIGHT_UPPER_LID, LandmarkPoint::new(0.725, 0.50));
        face.insert(indices::RIGHT_LOWER_LID, LandmarkPoint::new(0.725, 0.50));

        let features = extract_features(&face).unwrap();
        // avg height is the left eye's 0.06, not 0.03
        assert!((features.ratio - 0.15 / 0.06).abs() < 1e-9);
    }

    #[test]
    fn test_both_lids_collapsed_clamps_ratio_to_floor() {
        let mut face = base_face();
        for idx in [
            indices::LEFT_UPPER_LID,
            indices::LEFT_LOWER_LID,
            indices::RIGHT_UPPER_LID,
            indices::RIGHT_LOWER_LID,
        ] {
            face.insert(idx, LandmarkPoint::new(0.5, 0.50));
        }

        let features = extract_features(&face).unwrap();
        assert_eq!(features.ratio, 1.0);
        assert_eq!(features.openness_mm, 0.0);
    }

    #[test]
    fn test_ratio_clamped_to_ceiling() {
        let mut face = base_face();
        // very narrow lid gap relative to width
        face.insert(indices::LEFT_UPPER_LID, LandmarkPoint::new(0.275, 0.499));
        face.insert(indices::LEFT_LOWER_LID, LandmarkPoint::new(0.275, 0.501));
        face.insert(indices::RIGHT_UPPER_LID, LandmarkPoint::new(0.725, 0.499));
        face.insert(indices::RIGHT_LOWER_LID, LandmarkPoint::new(0.725, 0.501));

        let features = extract_features(&face).unwrap();
        assert_eq!(features.ratio, 5.0);
    }

    #[test]
    fn test_tilt_sign_and_magnitude() {
        let mut face = base_face();
        // outer corners 0.04 below the inner corners
        face.insert(indices::LEFT_EYE_OUTER, LandmarkPoint::new(0.20, 0.54));
        face.insert(indices::RIGHT_EYE_OUTER, LandmarkPoint::new(0.80, 0.54));

        let features = extract_features(&face).unwrap();
        assert!((features.tilt_angle - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_asymmetry_detected_from_corner_offset() {
        let mut face = base_face();
        // left outer corner rides 0.02 higher than the right one
        face.insert(indices::LEFT_EYE_OUTER, LandmarkPoint::new(0.20, 0.48));

        let features = extract_features(&face).unwrap();
        assert_eq!(features.symmetry, SymmetryScore::SlightAsymmetry);
    }

    #[test]
    fn test_hooded_lid_detection() {
        let mut face = base_face();
        // brow nearly touching the upper lid: fold 0.02 vs lid height 0.06
        face.insert(indices::LEFT_BROW, LandmarkPoint::new(0.275, 0.45));

        let features = extract_features(&face).unwrap();
        assert!(features.hooded_left);
        assert!(!features.hooded_right);
    }

    #[test]
    fn test_missing_landmark_is_an_error() {
        let mut face = FaceLandmarks::new();
        face.insert(indices::LEFT_EYE_OUTER, LandmarkPoint::new(0.2, 0.5));

        let err = extract_features(&face).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingLandmark(_)));
    }
}
