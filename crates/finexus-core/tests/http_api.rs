//! HttpApi against a throwaway in-memory REST server.
//!
//! The server mimics the finance API contract: `GET /assets` returns the
//! collection, `POST /assets` appends the JSON body.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Map, Value};

use finexus_core::{
    format_currency, ApiConfig, Category, FinexusError, HttpApi, RecordApi, ResourceSection,
    SectionPhase,
};

type Db = Arc<Mutex<Vec<Value>>>;

async fn list_assets(State(db): State<Db>) -> Json<Vec<Value>> {
    Json(db.lock().unwrap().clone())
}

async fn create_asset(State(db): State<Db>, Json(body): Json<Value>) -> StatusCode {
    db.lock().unwrap().push(body);
    StatusCode::CREATED
}

/// Start the server on an ephemeral port; returns its base URL and storage.
async fn spawn_server() -> (String, Db) {
    let db: Db = Arc::default();
    let app = Router::new()
        .route("/", get(|| async { Json(json!({"backend": "running"})) }))
        .route("/assets", get(list_assets).post(create_asset))
        .route("/broken", get(|| async { "<html>not json</html>" }))
        .route("/object", get(|| async { Json(json!({"name": "not a list"})) }))
        .route(
            "/failing",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR })
                .post(|| async { StatusCode::UNPROCESSABLE_ENTITY }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!([]))
            }),
        )
        .with_state(db.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), db)
}

fn api_for(base: &str) -> HttpApi {
    HttpApi::new(ApiConfig::new(base).unwrap()).unwrap()
}

// ============================================================================
// Raw API
// ============================================================================

#[tokio::test]
async fn test_list_returns_records() {
    let (base, db) = spawn_server().await;
    db.lock()
        .unwrap()
        .push(json!({"name": "MacBook", "category": "digital", "value": 1800}));

    let records = api_for(&base).list("/assets").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display("name"), "MacBook");
}

#[tokio::test]
async fn test_create_posts_draft_verbatim() {
    let (base, db) = spawn_server().await;
    let mut payload = Map::new();
    payload.insert("name".into(), json!("AAPL"));
    payload.insert("value".into(), json!(5000));

    api_for(&base).create("/assets", &payload).await.unwrap();

    assert_eq!(db.lock().unwrap().as_slice(), &[json!({"name": "AAPL", "value": 5000})]);
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let (base, _db) = spawn_server().await;
    let err = api_for(&base).list("/broken").await.unwrap_err();
    assert!(matches!(err, FinexusError::Malformed(_)), "{err:?}");
}

#[tokio::test]
async fn test_object_body_is_malformed() {
    let (base, _db) = spawn_server().await;
    let err = api_for(&base).list("/object").await.unwrap_err();
    assert!(matches!(err, FinexusError::Malformed(_)), "{err:?}");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let (base, _db) = spawn_server().await;
    let api = api_for(&base);

    let err = api.list("/failing").await.unwrap_err();
    assert!(matches!(err, FinexusError::Status { status: 500, .. }), "{err:?}");

    let err = api.create("/failing", &Map::new()).await.unwrap_err();
    assert!(matches!(err, FinexusError::Status { status: 422, .. }), "{err:?}");
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (base, _db) = spawn_server().await;
    let err = api_for(&base).list("/pensions").await.unwrap_err();
    assert!(matches!(err, FinexusError::Status { status: 404, .. }), "{err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = api_for(&format!("http://{}", addr))
        .list("/assets")
        .await
        .unwrap_err();
    assert!(matches!(err, FinexusError::Network(_)), "{err:?}");
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let (base, _db) = spawn_server().await;
    let config = ApiConfig::new(&base)
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let api = HttpApi::new(config).unwrap();

    let err = api.list("/slow").await.unwrap_err();
    assert!(matches!(err, FinexusError::Timeout(_)), "{err:?}");
}

#[tokio::test]
async fn test_status_probe() {
    let (base, _db) = spawn_server().await;
    let status = api_for(&base).status().await.unwrap();

    assert!(status.is_healthy());
    assert_eq!(status.url, format!("{}/", base));
    assert_eq!(status.body, Some(json!({"backend": "running"})));
}

// ============================================================================
// Section over HTTP
// ============================================================================

#[tokio::test]
async fn test_section_add_then_reload() {
    let (base, db) = spawn_server().await;
    db.lock()
        .unwrap()
        .push(json!({"name": "MacBook", "category": "digital", "value": 1800}));

    let mut section = ResourceSection::new(api_for(&base), Category::Assets.section());
    section.load().await.unwrap();
    assert_eq!(format_currency(section.total()), "$1,800");

    let mut form = section.config().form();
    form.set("name", "Bike").unwrap();
    form.set("category", "physical").unwrap();
    form.set("value", "1200.5").unwrap();
    section.submit(&mut form).await.unwrap();

    assert_eq!(section.records().len(), 2);
    assert_eq!(format_currency(section.total()), "$3,000.5");
    assert_eq!(section.store().phase(), SectionPhase::Loaded);
    assert!(form.draft().is_empty());
}
