//! Stub travel-search API server backed by the fixture data.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;

use super::fixtures;
use super::fixtures::{BOOM_DATABASE, TEST_DATABASE};

#[derive(Clone, Default)]
struct StubState {
    /// Query strings received by `/api/points`, for assertions on the wire.
    point_requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// In-process stub of the travel-search API.
pub struct StubApiServer {
    pub base_url: String,
    state: StubState,
}

impl StubApiServer {
    pub async fn spawn() -> Self {
        let state = StubState::default();
        let app = Router::new()
            .route("/api/points", get(search_points))
            .route("/api/points/bounds", get(point_bounds))
            .route("/api/travels/bounds", get(travel_bounds))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub API listener");
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub API server");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// All parameter maps received by `/api/points` so far.
    pub fn point_requests(&self) -> Vec<HashMap<String, String>> {
        self.state.point_requests.lock().unwrap().clone()
    }
}

async fn search_points(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.point_requests.lock().unwrap().push(params.clone());

    let database = params.get("database").cloned().unwrap_or_default();
    if database == BOOM_DATABASE {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if database != TEST_DATABASE {
        return Json(json!({ "points": [] })).into_response();
    }

    let limit: usize = params
        .get("limit")
        .and_then(|l| l.parse().ok())
        .unwrap_or(20);

    let mut points = fixtures::points();
    if let Some(name_part) = params.get("name_part") {
        let needle = name_part.to_lowercase();
        points.retain(|p| p.name.to_lowercase().contains(&needle));
    } else if let Some(id_part) = params.get("id_part") {
        let needle = id_part.to_uppercase();
        points.retain(|p| p.id.contains(&needle));
    } else if let (Some(x), Some(y)) = (params.get("x"), params.get("y")) {
        let x: f64 = x.parse().unwrap_or(0.0);
        let y: f64 = y.parse().unwrap_or(0.0);
        points.sort_by(|a, b| {
            let da = (a.x - x).powi(2) + (a.y - y).powi(2);
            let db = (b.x - x).powi(2) + (b.y - y).powi(2);
            da.partial_cmp(&db).unwrap()
        });
    } else {
        points.clear();
    }
    points.truncate(limit);

    Json(json!({ "points": points })).into_response()
}

async fn point_bounds(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("database").map(String::as_str) {
        Some(BOOM_DATABASE) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some(TEST_DATABASE) => {
            Json(json!({ "bounds": fixtures::point_bounds() })).into_response()
        }
        _ => Json(json!({})).into_response(),
    }
}

async fn travel_bounds(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("database").map(String::as_str) {
        Some(BOOM_DATABASE) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some(TEST_DATABASE) => {
            Json(json!({ "bounds": fixtures::travel_bounds() })).into_response()
        }
        _ => Json(json!({})).into_response(),
    }
}
