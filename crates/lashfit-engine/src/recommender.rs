//! Lash-mapping recommendation rules.
//!
//! Total over the categorical domain: every shape/exposure/projection
//! combination maps to some valid plan, unknown shapes included.

use lashfit_models::{
    CurlCategory, EyeFeatures, EyeProjection, EyeShape, EyelidExposure, LashRecommendation,
    LengthRange,
};
use tracing::debug;

/// Tilt above this gets a lifting-emphasis style annotation.
const TILT_LIFT_THRESHOLD: f64 = 3.0;
/// Tilt below this gets a soft even-mapping annotation.
const TILT_SOFT_THRESHOLD: f64 = 1.0;

/// Derive a lash-mapping plan from the eye shape and auxiliary features.
pub fn recommend(shape: EyeShape, features: &EyeFeatures) -> LashRecommendation {
    let mut style = base_style(shape).to_string();
    let mut description = base_description(shape).to_string();

    // Curl: dramatic lift for tight lid space or deep sockets, gentle for
    // high lids or prominent eyes, balanced otherwise.
    let curl = if features.eyelid_exposure == EyelidExposure::Low
        || features.projection == EyeProjection::DeepSet
    {
        CurlCategory::Lifting
    } else if features.eyelid_exposure == EyelidExposure::High
        || features.projection == EyeProjection::Prominent
    {
        CurlCategory::Gentle
    } else {
        CurlCategory::Balanced
    };

    let lengths = if features.openness_mm < 6.0 {
        LengthRange::Short
    } else if features.openness_mm < 9.0 {
        LengthRange::Medium
    } else {
        LengthRange::Long
    };

    if features.symmetry.is_asymmetric() {
        description.push_str(" Adjust lengths slightly to balance corner height differences.");
    }

    if features.tilt_angle > TILT_LIFT_THRESHOLD {
        style.push_str(" (Lifting emphasis on outer corners)");
    } else if features.tilt_angle < TILT_SOFT_THRESHOLD {
        style.push_str(" (Soft even mapping)");
    }

    if features.hooded_left || features.hooded_right {
        style.push_str(" (Hooded eyes: emphasize outer corner, use curled lashes)");
        description.push_str(
            " Hooded eyes benefit from curled lashes and emphasis on the outer corners to open the eye.",
        );
    }

    let notes = format!(
        "{}, {} lid exposure, {} alignment",
        features.projection, features.eyelid_exposure, features.symmetry
    );

    debug!(%shape, %curl, %lengths, "Built lash recommendation");

    LashRecommendation {
        eye_shape: shape,
        recommended_style: style,
        recommended_curl: curl,
        recommended_lengths_mm: lengths,
        description,
        notes,
    }
}

fn base_style(shape: EyeShape) -> &'static str {
    match shape {
        EyeShape::Almond => "Cat-Eye or Natural Sweep",
        EyeShape::Round => "Dolly or Open-Eye",
        EyeShape::Monolid => "Dolly or Gradual Lift",
        EyeShape::Tilted => "Cat-Eye Lift",
        EyeShape::Balanced => "Hybrid or Classic Map",
        EyeShape::Unknown => "Custom Lash Map",
    }
}

fn base_description(shape: EyeShape) -> &'static str {
    match shape {
        EyeShape::Almond => "Enhances natural symmetry and elongates outer corners.",
        EyeShape::Round => "Opens up and balances the roundness with upward length.",
        EyeShape::Monolid => "Adds visible curl and depth to create lift.",
        EyeShape::Tilted => "Balances asymmetry with lifted outer corners.",
        EyeShape::Balanced => "Maintains harmony with soft gradient length transitions.",
        EyeShape::Unknown => "Tailored through facial analysis.",
    }
}
