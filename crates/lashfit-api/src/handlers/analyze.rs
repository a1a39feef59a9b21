//! The lash-analysis endpoint.

use axum::extract::{Multipart, Query, State};
use axum::Json;
use lashfit_models::AnalysisReport;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Content types accepted for the uploaded image.
const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

#[derive(Debug, Deserialize, Default)]
pub struct AnalyzeParams {
    /// Include raw per-eye measurements in the response.
    #[serde(default)]
    pub debug: bool,
}

/// Analyze an uploaded face photo and return the lash-mapping report.
///
/// Expects a multipart `file` field carrying a JPEG/PNG/WebP image. The
/// image is forwarded to the landmark detector sidecar; the resulting
/// landmark set feeds the analysis engine.
pub async fn analyze_lash(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
    mut multipart: Multipart,
) -> ApiResult<Json<AnalysisReport>> {
    let mut upload: Option<(Vec<u8>, String, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        if !ACCEPTED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(ApiError::unsupported_media_type(format!(
                "Expected a JPEG/PNG/WebP image, got {content_type}"
            )));
        }

        let filename = field.file_name().unwrap_or("upload.jpg").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;

        upload = Some((bytes.to_vec(), filename, content_type));
        break;
    }

    let (image, filename, content_type) =
        upload.ok_or_else(|| ApiError::bad_request("Missing multipart field 'file'"))?;

    if image.is_empty() {
        return Err(ApiError::bad_request("Uploaded image is empty"));
    }

    debug!(filename = %filename, size = image.len(), "Forwarding upload to landmark detector");

    let landmarks = state
        .detector
        .detect_landmarks(image, &filename, &content_type)
        .await?;

    let report = lashfit_engine::analyze(&landmarks, params.debug)?;

    info!(
        eye_shape = %report.eye_shape,
        ratio = report.ratio,
        openness_mm = report.openness_mm,
        "Analysis complete"
    );

    Ok(Json(report))
}
