// HTTP request handlers
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::json_mapper::{snapshot_to_response, IngestAckResponse};
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Accept a reading pushed by a sensor agent
///
/// The body is taken as raw bytes so that undecodable input is reported as a
/// malformed payload rather than axum's extractor rejection.
pub async fn submit_reading(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Response {
    match state.ingestion_service.submit(&body).await {
        Ok(ack) => {
            let response = IngestAckResponse::from(&ack);
            match json_response(StatusCode::OK, &response, accepts_brotli(&headers)).await {
                Ok(response) => response,
                Err(status) => status.into_response(),
            }
        }
        Err(e) => e.into_response(),
    }
}

/// Latest reading with recent history, or the waiting descriptor
pub async fn get_sensors(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.snapshot_service.get_snapshot().await;
    let body = snapshot_to_response(&snapshot);

    match json_response(StatusCode::OK, &body, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Server-side classification of the latest reading
pub async fn get_sensor_status(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let report = state.snapshot_service.status_report().await;

    match json_response(StatusCode::OK, &report, accepts_brotli(&headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ingestion_service::IngestionService;
    use crate::application::snapshot_service::SnapshotService;
    use crate::infrastructure::memory_store::InMemoryReadingStore;
    use serde_json::{json, Value};

    fn state() -> Arc<AppState> {
        let store = Arc::new(InMemoryReadingStore::new());
        Arc::new(AppState {
            ingestion_service: IngestionService::new(store.clone()),
            snapshot_service: SnapshotService::new(store, 20),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn post(state: &Arc<AppState>, body: &'static str) -> Response {
        submit_reading(HeaderMap::new(), State(state.clone()), Bytes::from_static(body.as_bytes()))
            .await
    }

    #[tokio::test]
    async fn test_waiting_before_any_submission() {
        let state = state();
        let response = get_sensors(HeaderMap::new(), State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], json!("waiting"));
        let expected = body["expectedFormat"].as_object().unwrap();
        for id in ["soil-moisture", "temperature", "humidity", "light-intensity", "wind-speed", "rainfall"] {
            assert!(expected.contains_key(id), "missing {id}");
        }
    }

    #[tokio::test]
    async fn test_submit_then_query() {
        let state = state();

        let response = post(&state, r#"{"soil-moisture": 60, "temperature": 22.5, "node": "bed-3"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        let ack = body_json(response).await;
        assert_eq!(ack["success"], json!(true));
        assert_eq!(ack["receivedData"]["soil-moisture"], json!(60));
        assert_eq!(ack["receivedData"]["node"], json!("bed-3"));

        let body = body_json(get_sensors(HeaderMap::new(), State(state)).await).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["temperature"], json!(22.5));
        assert_eq!(body["data"]["node"], json!("bed-3"));
        assert_eq!(body["data"]["timestamp"], ack["timestamp"]);
        assert_eq!(body["lastUpdated"], ack["timestamp"]);
        assert_eq!(body["totalReadings"], json!(1));
    }

    #[tokio::test]
    async fn test_no_valid_data_is_bad_request() {
        let state = state();
        let response = post(&state, r#"{"pressure": 1013}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], json!("No valid sensor data provided"));

        let snapshot = body_json(get_sensors(HeaderMap::new(), State(state)).await).await;
        assert_eq!(snapshot["status"], json!("waiting"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let state = state();
        let response = post(&state, "{not json").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("Malformed sensor payload"));
    }

    #[tokio::test]
    async fn test_history_window_is_last_twenty() {
        let state = state();
        for i in 0..25 {
            let body = serde_json::to_vec(&json!({ "humidity": i })).unwrap();
            let response =
                submit_reading(HeaderMap::new(), State(state.clone()), Bytes::from(body)).await;
            assert_eq!(response.status(), StatusCode::OK);
        }

        let body = body_json(get_sensors(HeaderMap::new(), State(state)).await).await;
        let history = body["history"].as_array().unwrap();
        assert_eq!(history.len(), 20);
        assert_eq!(history[0]["humidity"], json!(5.0));
        assert_eq!(history[19]["humidity"], json!(24.0));
        assert_eq!(body["totalReadings"], json!(25));
    }

    #[tokio::test]
    async fn test_status_endpoint_classifies_latest() {
        let state = state();
        post(&state, r#"{"soil-moisture": 35, "temperature": 50}"#).await;

        let body = body_json(get_sensor_status(HeaderMap::new(), State(state)).await).await;
        let sensors = body["sensors"].as_array().unwrap();
        assert_eq!(sensors[0]["id"], json!("soil-moisture"));
        assert_eq!(sensors[0]["status"], json!("warning"));
        assert_eq!(sensors[1]["status"], json!("critical"));
        assert_eq!(sensors[2]["status"], json!("no-data"));
        assert_eq!(sensors[2]["value"], Value::Null);
        assert_eq!(body["alerts"], json!({ "critical": 1, "warning": 1, "noData": 4 }));
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "ok");
    }
}
