//! BackendClient against a stub analysis service on a local port.

use std::collections::HashMap;

use axum::extract::{Multipart, Query};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use finsight::session::{CHAT_FALLBACK_REPLY, INSIGHTS_ALERT, UPLOAD_FAILED};
use finsight::{
    ApiError, AppState, BackendClient, ChatSession, ClientConfig, InsightsBackend, Role, Trend,
    UploadFile, UploadForm, View,
};

async fn spawn_stub(router: Router) -> BackendClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    BackendClient::new(ClientConfig {
        base_url: format!("http://{}/", addr),
        request_timeout_secs: Some(5),
    })
    .unwrap()
}

async fn upload(mut multipart: Multipart) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        if !name.ends_with(".csv") {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"detail": "File must be a CSV"})),
            ));
        }
        let data = field.bytes().await.unwrap();
        let rows = String::from_utf8_lossy(&data)
            .lines()
            .skip(1)
            .filter(|l| !l.trim().is_empty())
            .count();
        return Ok(Json(json!({
            "message": "File uploaded successfully",
            "transactions_count": rows,
        })));
    }

    Err((
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"detail": "No file part"})),
    ))
}

async fn insights() -> Json<Value> {
    Json(json!({
        "total_spending": 1523.4,
        "top_categories": [
            {"category": "Groceries", "total": 600.0, "percentage": 39.4, "trend": "up"},
            {"category": "Dining", "total": 400.0, "percentage": 26.3, "trend": "down"},
            {"category": "Gas", "total": 200.5, "percentage": 13.2, "trend": "stable"}
        ],
        "anomalies": [
            {"date": "2024-03-02", "description": "TV", "amount": 899.0, "reason": "Unusually high transaction"}
        ],
        "monthly_average": 761.7
    }))
}

async fn chat(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let query = params.get("query").cloned().unwrap_or_default();
    Json(json!({
        "query": query,
        "response": format!("You asked: **{}**", query),
        "model": "stub",
        "usage": {"input_tokens": 1, "output_tokens": 1}
    }))
}

fn analysis_service() -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Json(json!({"message": "Financial Insights API", "version": "1.0.0"})) }),
        )
        .route("/api/upload", post(upload))
        .route("/api/insights", get(insights))
        .route(
            "/api/insights/summary",
            get(|| async {
                Json(json!({
                    "summary": "Groceries dominate.\n- Cut dining",
                    "generated_at": "2024-03-31T12:00:00"
                }))
            }),
        )
        .route("/api/chat", post(chat))
}

fn failing_service() -> Router {
    Router::new()
        .route(
            "/api/upload",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/api/insights",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "No data uploaded"})),
                )
            }),
        )
        .route(
            "/api/chat",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "") }),
        )
}

fn csv_file(name: &str) -> UploadFile {
    UploadFile::new(
        name,
        b"date,description,amount,category\n\
          2024-03-01,Store,12.50,Groceries\n\
          2024-03-02,TV,899.00,Electronics\n"
            .to_vec(),
    )
}

#[tokio::test]
async fn test_upload_then_dashboard() {
    let backend = spawn_stub(analysis_service()).await;

    let mut form = UploadForm::new();
    form.select(csv_file("march.csv"));
    let response = form.submit(&backend).await.expect("upload succeeds");
    assert_eq!(response.transactions_count, 2);
    assert!(!form.uploading);
    assert!(form.error.is_none());

    let mut app = AppState::new();
    assert_eq!(app.view(), View::Upload);
    app.load_insights(&backend).await.unwrap();

    assert_eq!(app.view(), View::Dashboard);
    assert!(!app.loading);
    let data = app.insights.unwrap();
    assert_eq!(data.top_categories.len(), 3);
    assert_eq!(data.top_categories[1].trend, Trend::Down);
    assert_eq!(data.anomalies[0].description, "TV");
}

#[tokio::test]
async fn test_upload_rejection_shows_detail() {
    let backend = spawn_stub(analysis_service()).await;

    let mut form = UploadForm::new();
    form.select(csv_file("march.txt"));
    assert!(form.submit(&backend).await.is_none());

    assert_eq!(form.error.as_deref(), Some("File must be a CSV"));
    assert!(!form.uploading);
    assert!(form.file.is_some());
}

#[tokio::test]
async fn test_upload_error_without_detail() {
    let backend = spawn_stub(failing_service()).await;

    let mut form = UploadForm::new();
    form.select(csv_file("march.csv"));
    assert!(form.submit(&backend).await.is_none());
    assert_eq!(form.error.as_deref(), Some(UPLOAD_FAILED));
}

#[tokio::test]
async fn test_insights_failure_keeps_upload_view() {
    let backend = spawn_stub(failing_service()).await;

    let err = backend.fetch_insights().await.unwrap_err();
    assert_eq!(err.detail(), Some("No data uploaded"));

    let mut app = AppState::new();
    assert_eq!(app.load_insights(&backend).await, Err(INSIGHTS_ALERT));
    assert_eq!(app.view(), View::Upload);
    assert!(!app.loading);
}

#[tokio::test]
async fn test_chat_query_is_url_encoded() {
    let backend = spawn_stub(analysis_service()).await;

    let mut chat = ChatSession::new();
    chat.set_input("What are my top categories? & why");
    assert!(chat.ask(&backend).await);

    assert_eq!(chat.messages.len(), 2);
    assert_eq!(chat.messages[0].role, Role::User);
    assert_eq!(
        chat.last_reply().map(|m| m.content.as_str()),
        Some("You asked: **What are my top categories? & why**")
    );
    assert!(!chat.loading);
}

#[tokio::test]
async fn test_chat_failure_appends_fallback() {
    let backend = spawn_stub(failing_service()).await;

    let mut chat = ChatSession::new();
    chat.set_input("Any unusual transactions recently?");
    assert!(chat.ask(&backend).await);

    assert_eq!(chat.messages.len(), 2);
    assert_eq!(
        chat.last_reply().map(|m| m.content.as_str()),
        Some(CHAT_FALLBACK_REPLY)
    );
}

#[tokio::test]
async fn test_summary_and_service_info() {
    let backend = spawn_stub(analysis_service()).await;

    let summary = backend.fetch_summary().await.unwrap();
    assert!(summary.summary.starts_with("Groceries"));

    let info = backend.service_info().await.unwrap();
    assert_eq!(info.message, "Financial Insights API");
    assert_eq!(info.version.as_deref(), Some("1.0.0"));
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let router = Router::new().route(
        "/api/insights",
        get(|| async { Json(json!({"total": "lots"})) }),
    );
    let backend = spawn_stub(router).await;

    let err = backend.fetch_insights().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = BackendClient::new(ClientConfig {
        base_url: format!("http://{}", addr),
        request_timeout_secs: Some(2),
    })
    .unwrap();

    let err = backend.fetch_insights().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
