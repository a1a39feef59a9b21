//! Eye-shape analysis engine.
//!
//! Pure, synchronous pipeline over an already-detected landmark set:
//!
//! 1. [`extract_features`] turns landmark coordinates into normalized
//!    geometric measurements (ratio, tilt, openness, symmetry, projection).
//! 2. [`classify`] maps the feature bundle onto a categorical eye shape.
//! 3. [`recommend`] derives a lash-mapping plan (style, curl, lengths).
//!
//! No shared state and no I/O; concurrent calls need no coordination.

pub mod classifier;
pub mod extractor;
pub mod recommender;

use lashfit_models::{AnalysisReport, FaceLandmarks, MissingLandmarkError};
use thiserror::Error;

pub use classifier::classify;
pub use extractor::extract_features;
pub use recommender::recommend;

/// Analysis failure. The only hard failure mode is a landmark set that
/// violates the detector contract; degenerate geometry is absorbed by
/// documented fallbacks instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    MissingLandmark(#[from] MissingLandmarkError),
}

/// Run the full pipeline: landmarks -> features -> shape -> plan -> report.
///
/// With `debug` set, the report carries the raw per-eye measurements in
/// addition to the derived values.
pub fn analyze(landmarks: &FaceLandmarks, debug: bool) -> Result<AnalysisReport, AnalysisError> {
    let features = extract_features(landmarks)?;
    let shape = classify(&features);
    let plan = recommend(shape, &features);
    Ok(AnalysisReport::new(&features, plan, debug))
}
