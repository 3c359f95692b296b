//! HTTP-level tests for the toolkit API.
//!
//! The router runs against the built-in catalog and a fake gateway, so no
//! network access is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use toolkit_api::catalog::{Backgrounds, Catalog};
use toolkit_api::llm_client::{CompletionOptions, LlmError, TextGateway};
use toolkit_api::{build_router, AppState, Config};

/// Returns `reply` for every call, or fails every call when it is `None`.
struct FakeGateway {
    reply: Option<String>,
}

#[async_trait]
impl TextGateway for FakeGateway {
    async fn complete(&self, _prompt: &str, _options: CompletionOptions) -> Result<String, LlmError> {
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "unavailable".to_string(),
        })
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}

fn app_with(catalog: Catalog, reply: Option<&str>) -> Router {
    build_router(AppState {
        catalog,
        backgrounds: Backgrounds::builtin(),
        llm: Arc::new(FakeGateway {
            reply: reply.map(str::to_string),
        }),
        config: Arc::new(Config::default()),
    })
}

/// Builtin catalog, gateway down.
fn offline_app() -> Router {
    app_with(Catalog::builtin(), None)
}

async fn json_request(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let req = match method {
        "GET" => Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
        "POST" => Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.unwrap_or(json!({})).to_string()))
            .unwrap(),
        _ => panic!("Unsupported method"),
    };

    let response = app.oneshot(req).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

// ============================================================================
// Health and pickers
// ============================================================================

#[tokio::test]
async fn test_health_and_ready() {
    let (status, body) = json_request(offline_app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["app"], "Toolkit API");

    let (status, body) = json_request(offline_app(), "GET", "/health/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["gemini_model"], "fake-model");
    assert_eq!(body["services"]["row_store"], "disabled");
    assert_eq!(body["rate_limit"]["requests"], 100);
}

#[tokio::test]
async fn test_root() {
    let (status, body) = json_request(offline_app(), "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
}

#[tokio::test]
async fn test_pickers() {
    let (status, body) = json_request(offline_app(), "GET", "/api/professions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["professions"].as_array().unwrap().len(), 12);
    assert_eq!(body["professions"][1]["id"], "developer");
    assert!(body["professions"][0]["toolCount"].is_number());

    let (status, body) = json_request(offline_app(), "GET", "/api/hobbies", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hobbies"].as_array().unwrap().len(), 10);
    assert_eq!(body["hobbies"][9]["label"], "Art & Design");
}

// ============================================================================
// Generation
// ============================================================================

#[tokio::test]
async fn test_generate_developer_hiking() {
    let (status, body) = json_request(
        offline_app(),
        "POST",
        "/api/generate",
        Some(json!({"profession": "developer", "hobby": "hiking", "use_ai": false})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "user-developer-hiking");
    assert_eq!(body["userName"], "User");
    assert_eq!(body["profession"], "Software Developer");

    let work = body["workTools"].as_array().unwrap();
    assert_eq!(work.len(), 5);
    assert_eq!(work[0]["id"], "chatgpt");
    assert!(work.iter().any(|t| t["category"] == "Code Assistant"));

    let life = body["lifeTools"].as_array().unwrap();
    assert_eq!(life[0]["name"], "AllTrails");
    assert!(life.iter().all(|t| !t["backgroundImage"].as_str().unwrap().is_empty()));

    let specs = &body["specs"];
    assert_eq!(specs["totalTools"], 7);
    assert_eq!(
        specs["freeTools"].as_u64().unwrap() + specs["paidTools"].as_u64().unwrap(),
        5
    );
    let cost: f64 = work.iter().map(|t| t["price"].as_f64().unwrap()).sum();
    assert_eq!(specs["monthlyCost"].as_f64().unwrap(), cost);
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_generate_unknown_inputs_is_usable() {
    let (status, body) = json_request(
        offline_app(),
        "POST",
        "/api/generate",
        Some(json!({"profession": "unknown-xyz", "hobby": "unknown-abc"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["workTools"].as_array().unwrap().is_empty());
    let life = body["lifeTools"].as_array().unwrap();
    assert_eq!(life.len(), 2);
    assert_eq!(life[0]["name"], "Unknown Abc Companion");
    assert_eq!(life[1]["name"], "Unknown Abc Tracker");
}

#[tokio::test]
async fn test_generate_with_name() {
    let (status, body) = json_request(
        offline_app(),
        "POST",
        "/api/generate",
        Some(json!({"profession": "designer", "hobby": "art", "name": "Ada", "use_ai": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "ada-designer-art");
    assert_eq!(body["userName"], "Ada");
}

#[tokio::test]
async fn test_generate_rejects_blank_profession() {
    let (status, body) = json_request(
        offline_app(),
        "POST",
        "/api/generate",
        Some(json!({"profession": "  ", "hobby": "hiking"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_generate_missing_field_is_client_error() {
    let (status, _) = json_request(
        offline_app(),
        "POST",
        "/api/generate",
        Some(json!({"profession": "developer"})),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_generate_empty_catalog_is_500() {
    let app = app_with(Catalog::new(Vec::new()), None);
    let (status, body) = json_request(
        app,
        "POST",
        "/api/generate",
        Some(json!({"profession": "developer", "hobby": "hiking"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "CATALOG_EMPTY");
}

#[tokio::test]
async fn test_smart_generate_offline_uses_keywords() {
    let (status, body) = json_request(
        offline_app(),
        "POST",
        "/api/smart-generate",
        Some(json!({"input": "Software engineer, gaming enthusiast"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slug"], "user-developer-gaming");
    assert_eq!(body["professionSlug"], "developer");
}

// ============================================================================
// Parse
// ============================================================================

#[tokio::test]
async fn test_parse_with_gateway_down_still_200() {
    let (status, body) = json_request(
        offline_app(),
        "POST",
        "/api/parse",
        Some(json!({"input": "I am a Product Manager who loves hiking"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profession"], "product-manager");
    assert_eq!(body["hobby"], "hiking");
    assert!(body["name"].is_null());
    assert!(body["confidence"].as_f64().unwrap() <= 0.5);
}

#[tokio::test]
async fn test_parse_with_json_reply() {
    let reply = r#"{"profession":"data-scientist","professionLabel":"Data Scientist","hobby":"music","hobbyLabel":"Music","name":"Lee","confidence":0.8}"#;
    let app = app_with(Catalog::builtin(), Some(reply));
    let (status, body) = json_request(
        app,
        "POST",
        "/api/parse",
        Some(json!({"input": "Lee, data scientist and musician"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["professionLabel"], "Data Scientist");
    assert_eq!(body["name"], "Lee");
    assert_eq!(body["confidence"], 0.8);
}

#[tokio::test]
async fn test_parse_rejects_empty_input() {
    let (status, _) = json_request(offline_app(), "POST", "/api/parse", Some(json!({"input": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Suggest and directory
// ============================================================================

#[tokio::test]
async fn test_suggest_gateway_down_is_empty_list() {
    let (status, body) = json_request(offline_app(), "GET", "/api/suggest?query=blog%20posts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["suggestions"], json!([]));
}

#[tokio::test]
async fn test_suggest_accepts_q_alias_and_limit() {
    let reply = r#"[{"name":"Jasper","description":"Copy","category":"Writing","url":"https://jasper.ai","pricing":"Paid","relevanceScore":0.9},{"name":"Copy.ai"}]"#;
    let app = app_with(Catalog::builtin(), Some(reply));
    let (status, body) = json_request(app, "GET", "/api/suggest?q=copywriting&limit=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let suggestions = body["suggestions"].as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["relevanceScore"], 0.9);
}

#[tokio::test]
async fn test_suggest_limit_out_of_range() {
    let (status, _) = json_request(offline_app(), "GET", "/api/suggest?query=x&limit=21", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = json_request(offline_app(), "GET", "/api/suggest?limit=3", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tool_directory() {
    let (status, body) = json_request(offline_app(), "GET", "/api/tools?category=code_assistant", None).await;
    assert_eq!(status, StatusCode::OK);
    let tools = body["tools"].as_array().unwrap();
    assert!(!tools.is_empty());
    assert!(tools.iter().all(|t| t["category"] == "Code Assistant"));

    let (status, body) = json_request(offline_app(), "GET", "/api/tools/github-copilot", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "GitHub Copilot");

    let (status, body) = json_request(offline_app(), "GET", "/api/tools/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, _) = json_request(offline_app(), "GET", "/api/tools?category=spaceships", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
