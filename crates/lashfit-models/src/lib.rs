//! Shared data models for the Lashfit backend.
//!
//! This crate provides Serde-serializable types for:
//! - Facial landmark points and the FaceMesh indices we consume
//! - Per-eye geometric features and their categorical buckets
//! - Eye-shape labels
//! - Lash-mapping recommendations and the final analysis report

pub mod features;
pub mod landmark;
pub mod recommendation;
pub mod report;
pub mod shape;

// Re-export common types
pub use features::{EyeFeatures, EyeMeasurements, EyeProjection, EyelidExposure, SymmetryScore};
pub use landmark::{indices, FaceLandmarks, LandmarkPoint, MissingLandmarkError};
pub use recommendation::{CurlCategory, LashRecommendation, LengthRange};
pub use report::{AnalysisReport, EyePair, HoodedEye};
pub use shape::EyeShape;
