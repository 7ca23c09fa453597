//! Event endpoints

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, put},
};
use serde::Serialize;

use stickercal_core::{Event, NewEvent};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", put(update_event).delete(delete_event))
}

#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

#[derive(Serialize)]
pub struct EventResponse {
    pub event: Event,
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

fn parse_body(body: Result<Json<NewEvent>, JsonRejection>) -> Result<NewEvent, AppError> {
    body.map(|Json(new)| new).map_err(|rejection| {
        AppError::new(StatusCode::BAD_REQUEST, "Invalid request body")
            .with_details(rejection.body_text())
    })
}

/// GET /events - List every stored event
async fn list_events(State(state): State<AppState>) -> Result<Json<EventsResponse>, AppError> {
    let events = state
        .events
        .list()
        .await
        .map_err(AppError::context("Failed to fetch events"))?;

    Ok(Json(EventsResponse { events }))
}

/// POST /events - Create an event from {date, title, color, rotation}
async fn create_event(
    State(state): State<AppState>,
    body: Result<Json<NewEvent>, JsonRejection>,
) -> Result<Json<EventResponse>, AppError> {
    let new = parse_body(body)?;

    let event = state
        .events
        .create(new)
        .await
        .map_err(AppError::context("Failed to create event"))?;

    Ok(Json(EventResponse { event }))
}

/// PUT /events/:id - Overwrite an event with the request body
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<NewEvent>, JsonRejection>,
) -> Result<Json<EventResponse>, AppError> {
    let new = parse_body(body)?;

    let event = state
        .events
        .update(&id, new)
        .await
        .map_err(AppError::context("Failed to update event"))?;

    Ok(Json(EventResponse { event }))
}

/// DELETE /events/:id - Delete an event (unknown ids succeed)
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    state
        .events
        .delete(&id)
        .await
        .map_err(AppError::context("Failed to delete event"))?;

    Ok(Json(DeleteResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use stickercal_core::kv::{FileStore, MemoryStore};
    use tower::ServiceExt;

    use crate::app;
    use crate::state::AppState;

    fn test_app() -> Router {
        app(AppState::new(Arc::new(MemoryStore::new()), None), "/api")
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (u16, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status().as_u16();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_create_list_delete_roundtrip() {
        let app = test_app();

        let (status, body) = send(
            &app,
            "POST",
            "/api/events",
            Some(json!({"date": "2025-03-14", "title": "Demo", "color": "#93C5FD", "rotation": -1.25})),
        )
        .await;
        assert_eq!(status, 200);
        let event = &body["event"];
        assert_eq!(event["date"], "2025-03-14");
        assert_eq!(event["title"], "Demo");
        assert_eq!(event["rotation"], -1.25);
        let id = event["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let (status, body) = send(&app, "GET", "/api/events", None).await;
        assert_eq!(status, 200);
        assert_eq!(body["events"].as_array().unwrap().len(), 1);
        assert_eq!(body["events"][0]["id"], id.as_str());

        let (status, body) = send(&app, "DELETE", &format!("/api/events/{id}"), None).await;
        assert_eq!(status, 200);
        assert_eq!(body, json!({"success": true}));

        let (_, body) = send(&app, "GET", "/api/events", None).await;
        assert_eq!(body, json!({"events": []}));
    }

    #[tokio::test]
    async fn test_create_requires_date_and_title() {
        let app = test_app();

        for payload in [
            json!({"title": "Demo"}),
            json!({"date": "2025-03-14"}),
            json!({"date": "", "title": "Demo"}),
        ] {
            let (status, body) = send(&app, "POST", "/api/events", Some(payload)).await;
            assert_eq!(status, 400);
            assert_eq!(body["error"], "Date and title are required");
        }

        let (_, body) = send(&app, "GET", "/api/events", None).await;
        assert_eq!(body["events"], json!([]));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let app = test_app();

        let request = Request::builder()
            .method("POST")
            .uri("/api/events")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status().as_u16(), 400);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid request body");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let app = test_app();

        let (_, body) = send(
            &app,
            "POST",
            "/api/events",
            Some(json!({"id": "chosen", "date": "2025-03-14", "title": "Demo"})),
        )
        .await;
        assert_ne!(body["event"]["id"], "chosen");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_succeeds() {
        let app = test_app();

        let (status, body) = send(&app, "DELETE", "/api/events/nope", None).await;
        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn test_update_overwrites_verbatim() {
        let app = test_app();

        let (status, body) = send(
            &app,
            "PUT",
            "/api/events/abc",
            Some(json!({"date": "2025-05-05", "title": "Moved", "color": "#FDBA74", "rotation": 2.0})),
        )
        .await;
        assert_eq!(status, 200);
        assert_eq!(body["event"]["id"], "abc");
        assert_eq!(body["event"]["title"], "Moved");

        let (_, body) = send(&app, "GET", "/api/events", None).await;
        assert_eq!(body["events"][0]["id"], "abc");
        assert_eq!(body["events"][0]["date"], "2025-05-05");
    }

    #[tokio::test]
    async fn test_n_creates_m_deletes() {
        let app = test_app();

        let mut ids = Vec::new();
        for i in 0..6 {
            let (_, body) = send(
                &app,
                "POST",
                "/api/events",
                Some(json!({"date": "2025-06-01", "title": format!("e{i}")})),
            )
            .await;
            ids.push(body["event"]["id"].as_str().unwrap().to_string());
        }
        for id in &ids[..4] {
            send(&app, "DELETE", &format!("/api/events/{id}"), None).await;
        }

        let (_, body) = send(&app, "GET", "/api/events", None).await;
        assert_eq!(body["events"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_is_500_with_details() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "corrupt").unwrap();
        let app = app(AppState::new(Arc::new(FileStore::new(&path)), None), "/api");

        let (status, body) = send(&app, "GET", "/api/events", None).await;
        assert_eq!(status, 500);
        assert_eq!(body["error"], "Failed to fetch events");
        assert!(body["details"].as_str().unwrap().contains("Serialization"));
    }

    #[tokio::test]
    async fn test_routes_live_under_prefix() {
        let app = test_app();

        let (status, _) = send(&app, "GET", "/events", None).await;
        assert_eq!(status, 404);
    }
}
