//! Facial landmark points and the FaceMesh indices the analyzer consumes.
//!
//! The external detector produces a full MediaPipe FaceMesh point set
//! (468+ points); the analyzer only reads the fixed subset in [`indices`].

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// FaceMesh landmark indices consumed by the analyzer.
pub mod indices {
    /// Outer corner of the left eye.
    pub const LEFT_EYE_OUTER: u32 = 33;
    /// Inner corner of the left eye.
    pub const LEFT_EYE_INNER: u32 = 133;
    /// Inner corner of the right eye.
    pub const RIGHT_EYE_INNER: u32 = 362;
    /// Outer corner of the right eye.
    pub const RIGHT_EYE_OUTER: u32 = 263;
    /// Midpoint of the left upper lid.
    pub const LEFT_UPPER_LID: u32 = 159;
    /// Midpoint of the left lower lid.
    pub const LEFT_LOWER_LID: u32 = 145;
    /// Midpoint of the right upper lid.
    pub const RIGHT_UPPER_LID: u32 = 386;
    /// Midpoint of the right lower lid.
    pub const RIGHT_LOWER_LID: u32 = 374;
    /// Left brow point above the upper lid (crease estimation).
    pub const LEFT_BROW: u32 = 65;
    /// Right brow point above the upper lid (crease estimation).
    pub const RIGHT_BROW: u32 = 295;

    /// Every index the analyzer requires.
    pub const REQUIRED: &[u32] = &[
        LEFT_EYE_OUTER,
        LEFT_EYE_INNER,
        RIGHT_EYE_INNER,
        RIGHT_EYE_OUTER,
        LEFT_UPPER_LID,
        LEFT_LOWER_LID,
        RIGHT_UPPER_LID,
        RIGHT_LOWER_LID,
        LEFT_BROW,
        RIGHT_BROW,
    ];
}

/// A single 2-D landmark in normalized image space (0.0 to 1.0 on each axis,
/// y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
}

impl LandmarkPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in normalized coordinate space.
    pub fn distance_to(&self, other: &LandmarkPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A detected face's landmark set, keyed by FaceMesh index.
///
/// Read-only from the analyzer's perspective: the detector supplies it
/// wholesale and nothing downstream mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct FaceLandmarks {
    points: HashMap<u32, LandmarkPoint>,
}

impl FaceLandmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a landmark set from a positional array, as returned by the
    /// detector (element i becomes FaceMesh index i).
    pub fn from_points(points: impl IntoIterator<Item = LandmarkPoint>) -> Self {
        Self {
            points: points
                .into_iter()
                .enumerate()
                .map(|(i, p)| (i as u32, p))
                .collect(),
        }
    }

    pub fn insert(&mut self, index: u32, point: LandmarkPoint) {
        self.points.insert(index, point);
    }

    pub fn get(&self, index: u32) -> Option<LandmarkPoint> {
        self.points.get(&index).copied()
    }

    /// Fetch a required landmark, failing fast with the missing index.
    ///
    /// The detector contract guarantees a full point set, so a miss here is
    /// a contract violation rather than something to paper over with zeros.
    pub fn require(&self, index: u32) -> Result<LandmarkPoint, MissingLandmarkError> {
        self.get(index).ok_or(MissingLandmarkError(index))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A required landmark index was absent from the supplied set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Missing required landmark index {0}")]
pub struct MissingLandmarkError(pub u32);
