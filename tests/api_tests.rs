/// End-to-end tests of the HTTP API: estimate, email gate and lead forwarding
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use roi_calculator::{
    config::{Config, LeadMode},
    handlers::AppState,
    leads::build_sink,
    server::create_router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::{
    matchers::{body_partial_json, header as header_matcher, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn log_mode_app() -> Router {
    let mut config = Config::default();
    config.leads.mode = LeadMode::Log;
    config.leads.log_delay_ms = 0;
    app_for(config)
}

fn forward_mode_app(endpoint: String) -> Router {
    let mut config = Config::default();
    config.leads.mode = LeadMode::Forward;
    config.leads.endpoint = endpoint;
    config.leads.timeout_seconds = 5;
    app_for(config)
}

fn app_for(config: Config) -> Router {
    let sink = build_sink(&config.leads, reqwest::Client::new());
    create_router(AppState::new(config, sink), None)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn sample_inputs() -> Value {
    json!({
        "customerServiceHours": 10,
        "leadNurturingHours": 5,
        "hourlyWage": 20
    })
}

#[tokio::test]
async fn test_estimate_returns_results() {
    let (status, body) = post_json(log_mode_app(), "/api/estimate", sample_inputs()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requiresEmail"], true);

    let results = &body["results"];
    let monthly = results["monthlyTimeSaved"].as_f64().unwrap();
    assert!((monthly - 37.265).abs() < 0.001);
    assert_eq!(results["timeToValue"], 2.0);
    assert!((results["productivityGain"].as_f64().unwrap() - 57.375).abs() < 1e-9);

    // The report is only released after lead capture
    assert!(body.get("report").is_none());
}

#[tokio::test]
async fn test_estimate_without_workload_skips_email_gate() {
    let (status, body) = post_json(
        log_mode_app(),
        "/api/estimate",
        json!({"customerServiceHours": 0, "leadNurturingHours": 0, "hourlyWage": 45}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["requiresEmail"], false);
    assert_eq!(body["results"]["annualCostSaved"], 0.0);
}

#[tokio::test]
async fn test_estimate_rejects_negative_input() {
    let (status, body) = post_json(
        log_mode_app(),
        "/api/estimate",
        json!({"customerServiceHours": -1, "leadNurturingHours": 0, "hourlyWage": 20}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["type"], "invalid_input");
    assert!(body["error"].as_str().unwrap().contains("customerServiceHours"));
}

#[tokio::test]
async fn test_estimate_rejects_malformed_body() {
    let (status, body) = post_json(
        log_mode_app(),
        "/api/estimate",
        json!({"customerServiceHours": "ten"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "invalid_input");
}

#[tokio::test]
async fn test_estimate_rejects_overflowing_input() {
    let (status, body) = post_json(
        log_mode_app(),
        "/api/estimate",
        json!({"customerServiceHours": 1e308, "leadNurturingHours": 1e308, "hourlyWage": 20}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["type"], "invalid_input");
    assert!(body["error"].as_str().unwrap().contains("too large"));
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn test_overflowing_lead_is_not_forwarded() {
    let lead_store = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(0)
        .mount(&lead_store)
        .await;

    let app = forward_mode_app(format!("{}/api/leads", lead_store.uri()));
    let (status, body) = post_json(
        app,
        "/api/leads",
        json!({
            "email": "owner@shop.example",
            "inputs": {"customerServiceHours": 1e300, "leadNurturingHours": 0, "hourlyWage": 1e300}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "invalid_input");
    assert!(body["error"].as_str().unwrap().contains("monthlyCostSaved"));
}

#[tokio::test]
async fn test_lead_with_invalid_email_is_rejected() {
    let (status, body) = post_json(
        log_mode_app(),
        "/api/leads",
        json!({"email": "not-an-email", "inputs": sample_inputs()}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Please enter a valid email address");
}

#[tokio::test]
async fn test_lead_in_log_mode_unlocks_report() {
    let (status, body) = post_json(
        log_mode_app(),
        "/api/leads",
        json!({
            "email": "owner@shop.example",
            "inputs": sample_inputs(),
            "results": {"monthlyTimeSaved": 9999}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["id"].is_string());

    let report = &body["report"];
    // Client-sent results are ignored
    let monthly = report["results"]["monthlyTimeSaved"].as_f64().unwrap();
    assert!((monthly - 37.265).abs() < 0.001);
    assert_eq!(report["tips"].as_array().unwrap().len(), 3);
    assert_eq!(report["chart"]["labels"][1], "Annual Savings");
    assert_eq!(report["factors"]["factors"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_lead_is_forwarded_to_lead_store() {
    let lead_store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/leads"))
        .and(header_matcher("content-type", "application/json"))
        .and(body_partial_json(json!({
            "email": "owner@shop.example",
            "inputs": {"customerServiceHours": 10.0, "leadNurturingHours": 5.0, "hourlyWage": 20.0}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&lead_store)
        .await;

    let app = forward_mode_app(format!("{}/api/leads", lead_store.uri()));
    let (status, body) = post_json(
        app,
        "/api/leads",
        json!({"email": "owner@shop.example", "inputs": sample_inputs()}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let received = lead_store.received_requests().await.unwrap();
    let forwarded: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert!(forwarded["results"]["annualCostSaved"].as_f64().unwrap() > 8943.0);
    assert_eq!(forwarded["id"], body["id"]);
}

#[tokio::test]
async fn test_lead_store_error_message_is_surfaced() {
    let lead_store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/leads"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"error": "Email already registered"})),
        )
        .mount(&lead_store)
        .await;

    let app = forward_mode_app(format!("{}/api/leads", lead_store.uri()));
    let (status, body) = post_json(
        app,
        "/api/leads",
        json!({"email": "owner@shop.example", "inputs": sample_inputs()}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Email already registered");
    assert_eq!(body["type"], "lead_rejected");
}

#[tokio::test]
async fn test_lead_store_failure_without_message_uses_fallback() {
    let lead_store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/leads"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&lead_store)
        .await;

    let app = forward_mode_app(format!("{}/api/leads", lead_store.uri()));
    let (status, body) = post_json(
        app,
        "/api/leads",
        json!({"email": "owner@shop.example", "inputs": sample_inputs()}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Failed to save submission");
}

#[tokio::test]
async fn test_unreachable_lead_store_is_upstream_error() {
    // Nothing listens on the discard port
    let app = forward_mode_app("http://127.0.0.1:9/api/leads".to_string());
    let (status, body) = post_json(
        app,
        "/api/leads",
        json!({"email": "owner@shop.example", "inputs": sample_inputs()}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["type"], "upstream_error");
}

#[tokio::test]
async fn test_health_and_readiness() {
    let response = log_mode_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = log_mode_app()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
