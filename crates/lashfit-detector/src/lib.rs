//! Client for the facial-landmark detector sidecar.
//!
//! The sidecar wraps MediaPipe FaceMesh behind a small HTTP API: it accepts
//! an uploaded image and returns the detected face's landmark array in
//! normalized coordinates. This crate owns the wire contract; the analysis
//! engine never sees HTTP.

use std::time::Duration;

use lashfit_models::{FaceLandmarks, LandmarkPoint};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Default sidecar endpoint for local development.
const DEFAULT_DETECTOR_URL: &str = "http://localhost:8500";

/// Default request timeout for detection calls, seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Detector failures, split so callers can map "no face" to a user error
/// and everything else to an upstream failure.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// The image decoded fine but contained no detectable face.
    #[error("No face detected in the supplied image")]
    NoFaceDetected,

    /// This client could not assemble a valid request for the sidecar.
    #[error("Invalid detector request: {0}")]
    InvalidRequest(String),

    /// The sidecar rejected the request or failed internally.
    #[error("Detector service error ({status}): {detail}")]
    Service { status: StatusCode, detail: String },

    /// Transport-level failure reaching the sidecar.
    #[error("Detector request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The sidecar answered with a body this client cannot interpret.
    #[error("Invalid detector response: {0}")]
    InvalidResponse(String),
}

/// Landmark detection response. The sidecar returns either the positional
/// landmark array or an error string, mirroring its Python implementation.
#[derive(Debug, Deserialize)]
struct DetectResponse {
    #[serde(default)]
    landmarks: Option<Vec<LandmarkPoint>>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP client for the landmark detector sidecar.
#[derive(Debug, Clone)]
pub struct DetectorClient {
    base_url: String,
    client: Client,
}

impl DetectorClient {
    /// Create a client against an explicit base URL with a request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DetectorError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client from the `DETECTOR_URL` and `REQUEST_TIMEOUT`
    /// environment variables.
    pub fn from_env() -> Result<Self, DetectorError> {
        let base_url =
            std::env::var("DETECTOR_URL").unwrap_or_else(|_| DEFAULT_DETECTOR_URL.to_string());
        let timeout_secs = std::env::var("REQUEST_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Detect face landmarks in an uploaded image.
    ///
    /// Returns the full landmark set keyed by FaceMesh index (element i of
    /// the sidecar's array becomes index i).
    pub async fn detect_landmarks(
        &self,
        image: Vec<u8>,
        filename: &str,
        content_type: &str,
    ) -> Result<FaceLandmarks, DetectorError> {
        let part = Part::bytes(image)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|e| DetectorError::InvalidRequest(format!("Bad content type: {e}")))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/landmarks", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, "Detector service returned an error");
            return Err(DetectorError::Service { status, detail });
        }

        let body: DetectResponse = response
            .json()
            .await
            .map_err(|e| DetectorError::InvalidResponse(e.to_string()))?;

        if let Some(error) = body.error {
            return if error.to_lowercase().contains("no face") {
                Err(DetectorError::NoFaceDetected)
            } else {
                Err(DetectorError::Service {
                    status,
                    detail: error,
                })
            };
        }

        let points = body
            .landmarks
            .ok_or_else(|| DetectorError::InvalidResponse("Missing landmarks field".to_string()))?;

        debug!(count = points.len(), "Received landmark set from detector");
        Ok(FaceLandmarks::from_points(points))
    }

    /// Liveness ping for readiness probes.
    pub async fn health_check(&self) -> Result<(), DetectorError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DetectorError::Service {
                status,
                detail: "health check failed".to_string(),
            })
        }
    }
}
