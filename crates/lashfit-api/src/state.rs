//! Application state.

use std::sync::Arc;

use lashfit_detector::{DetectorClient, DetectorError};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub detector: Arc<DetectorClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig) -> Result<Self, DetectorError> {
        let detector = DetectorClient::new(config.detector_url.clone(), config.request_timeout)?;
        Ok(Self {
            config,
            detector: Arc::new(detector),
        })
    }
}
