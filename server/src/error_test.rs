use super::*;

#[test]
fn variants_map_to_statuses() {
    assert_eq!(GatewayError::Upstream("down".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(GatewayError::NotConfigured("IMAGE_HOST_API_KEY").status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(GatewayError::BadRequest("missing".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(GatewayError::TooLarge(1024).status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[test]
fn not_configured_message_names_the_setting() {
    assert_eq!(GatewayError::NotConfigured("IMAGE_HOST_API_KEY").to_string(), "IMAGE_HOST_API_KEY is not configured");
}

#[test]
fn into_response_sets_status() {
    let response = GatewayError::BadRequest("missing image field".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn into_response_body_carries_message() {
    let response = GatewayError::Upstream("connection refused".into()).into_response();
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "upstream request failed: connection refused");
}
