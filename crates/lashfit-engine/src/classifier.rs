//! Rule-based eye-shape classification.

use lashfit_models::{EyeFeatures, EyeShape};
use tracing::debug;

/// Classify a feature bundle into an eye-shape label.
///
/// The rules are evaluated in a fixed priority order and the first match
/// wins. The numeric ranges overlap, so reordering changes outcomes for
/// boundary inputs; the order below is the tuned behavior, not incidental.
pub fn classify(features: &EyeFeatures) -> EyeShape {
    let ratio = features.ratio;
    let openness = features.openness_mm;
    let tilt = features.tilt_angle;

    let shape = if ratio < 1.8 && openness > 10.0 {
        EyeShape::Round
    } else if (1.8..=3.2).contains(&ratio) && openness > 7.0 {
        EyeShape::Almond
    } else if tilt > 2.5 {
        EyeShape::Tilted
    } else if openness < 6.5 {
        EyeShape::Monolid
    } else {
        EyeShape::Balanced
    };

    debug!(ratio, openness, tilt, %shape, "Classified eye shape");
    shape
}
