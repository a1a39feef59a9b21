//! Detector client tests against a mock sidecar.

use std::time::Duration;

use lashfit_detector::{DetectorClient, DetectorError};
use lashfit_models::indices;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn landmark_array(count: usize) -> serde_json::Value {
    let points: Vec<_> = (0..count)
        .map(|i| json!({"x": 0.001 * i as f64, "y": 0.5}))
        .collect();
    json!({ "landmarks": points })
}

#[tokio::test]
async fn detect_returns_indexed_landmark_set() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/landmarks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(landmark_array(468)))
        .mount(&server)
        .await;

    let client = DetectorClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    let landmarks = client
        .detect_landmarks(vec![0xFF, 0xD8, 0xFF], "face.jpg", "image/jpeg")
        .await
        .unwrap();

    assert_eq!(landmarks.len(), 468);
    let point = landmarks.get(indices::LEFT_EYE_OUTER).unwrap();
    assert!((point.x - 0.033).abs() < 1e-9);
}

#[tokio::test]
async fn no_face_maps_to_dedicated_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/landmarks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "No face detected"})))
        .mount(&server)
        .await;

    let client = DetectorClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    let err = client
        .detect_landmarks(vec![1, 2, 3], "face.jpg", "image/jpeg")
        .await
        .unwrap_err();

    assert!(matches!(err, DetectorError::NoFaceDetected));
}

#[tokio::test]
async fn service_failure_is_surfaced_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/landmarks"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = DetectorClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    let err = client
        .detect_landmarks(vec![1, 2, 3], "face.jpg", "image/jpeg")
        .await
        .unwrap_err();

    match err {
        DetectorError::Service { status, detail } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(detail, "boom");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_landmarks_field_is_invalid() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/landmarks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = DetectorClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    let err = client
        .detect_landmarks(vec![1, 2, 3], "face.jpg", "image/jpeg")
        .await
        .unwrap_err();

    assert!(matches!(err, DetectorError::InvalidResponse(_)));
}

#[tokio::test]
async fn configured_timeout_aborts_slow_detector() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/landmarks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(landmark_array(468))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = DetectorClient::new(server.uri(), Duration::from_millis(100)).unwrap();
    let err = client
        .detect_landmarks(vec![1, 2, 3], "face.jpg", "image/jpeg")
        .await
        .unwrap_err();

    match err {
        DetectorError::Http(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn bad_content_type_is_a_request_error() {
    // fails before anything is sent, so no mock server is needed
    let client = DetectorClient::new("http://localhost:1", Duration::from_secs(5)).unwrap();
    let err = client
        .detect_landmarks(vec![1, 2, 3], "face.jpg", "not a mime type")
        .await
        .unwrap_err();

    assert!(matches!(err, DetectorError::InvalidRequest(_)));
}

#[tokio::test]
async fn health_check_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = DetectorClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    assert!(client.health_check().await.is_ok());
}
