use reqwest::StatusCode;
use serde_json::{json, Value};
use textkit_lib::api::{build_router, AppState};
use textkit_lib::services::config_store::AppConfig;
use tokio::net::TcpListener;

const FORMAL_SAMPLE: &str = "Furthermore, it is important to note that the implementation of this framework is crucial. Moreover, it is essential to utilize a comprehensive methodology.";

async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(AppState::new(AppConfig::default()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn post_json(base: &str, path: &str, body: Value) -> (StatusCode, Value) {
    let resp = reqwest::Client::new()
        .post(format!("{}{}", base, path))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn rejects_text_one_below_minimum() {
    let base = spawn_app().await;
    let (status, body) = post_json(&base, "/api/analyze", json!({ "text": "a".repeat(39) })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Text must be at least 40 characters long" }));
}

#[tokio::test]
async fn rejects_text_one_above_maximum() {
    let base = spawn_app().await;
    let (status, body) = post_json(&base, "/api/analyze", json!({ "text": "a".repeat(2001) })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Text must be less than 2000 characters" }));
}

#[tokio::test]
async fn rejects_blank_or_missing_text() {
    let base = spawn_app().await;
    for payload in [json!({ "text": "     \n   " }), json!({}), json!({ "text": null })] {
        let (status, body) = post_json(&base, "/api/analyze", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Text is required" }));
    }
}

#[tokio::test]
async fn malformed_json_is_internal_error() {
    let base = spawn_app().await;
    let resp = reqwest::Client::new()
        .post(format!("{}/api/analyze", base))
        .header("content-type", "application/json")
        .body("{\"text\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn json_body_without_content_type_is_accepted() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/analyze", base))
        .body(json!({ "text": "too short" }).to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Text must be at least 40 characters long" }));

    let resp = client
        .post(format!("{}/api/analyze", base))
        .header("content-type", "text/plain")
        .body(json!({ "text": FORMAL_SAMPLE }).to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["originalText"], json!(FORMAL_SAMPLE));
}

#[tokio::test]
async fn formal_text_is_flagged_and_humanized() {
    let base = spawn_app().await;
    let text = [FORMAL_SAMPLE; 4].join(" ");
    let (status, body) = post_json(&base, "/api/analyze", json!({ "text": text })).await;
    assert_eq!(status, StatusCode::OK);

    let ai = body["aiScore"].as_f64().unwrap();
    let human = body["humanScore"].as_f64().unwrap();
    let confidence = body["confidence"].as_f64().unwrap();
    assert!(ai > 50.0);
    assert_eq!(ai + human, 100.0);
    assert!((60.0..=98.0).contains(&confidence));
    assert_eq!(body["isAIGenerated"], json!(true));
    assert_eq!(body["originalText"], json!(text));

    let humanized = body["humanizedText"].as_str().unwrap();
    assert!(humanized.contains("use a complete methodology"));

    let changes = body["humanizedChanges"].as_array().unwrap();
    assert!(changes.iter().any(|c| c["original"] == "utilize" && c["replacement"] == "use"));
    assert!(changes.iter().any(|c| c["original"] == "comprehensive" && c["replacement"] == "complete"));
    let starts: Vec<u64> = changes.iter().map(|c| c["startIndex"].as_u64().unwrap()).collect();
    assert!(starts.windows(2).all(|w| w[0] < w[1]));
    for c in changes {
        assert!(c["startIndex"].as_u64().unwrap() < c["endIndex"].as_u64().unwrap());
    }

    let details = &body["analysisDetails"];
    for key in [
        "repetitionScore",
        "complexityScore",
        "formalityScore",
        "coherenceScore",
        "technicalJargonScore",
        "sentenceStructureScore",
    ] {
        assert!(details[key].is_number(), "missing {}", key);
    }
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn casual_text_is_likely_human() {
    let base = spawn_app().await;
    let text = "I can't believe how fun this was! We laughed so much, honestly.";
    let (status, body) = post_json(&base, "/api/analyze", json!({ "text": text })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["aiScore"].as_f64().unwrap() < 30.0);
    assert_eq!(body["detectedAIModel"], json!("Likely Human"));
    assert_eq!(body["isAIGenerated"], json!(false));
    assert_eq!(body["humanizedText"], json!(text));
    assert_eq!(body["humanizedChanges"], json!([]));
}

#[tokio::test]
async fn text_tools_round_trip() {
    let base = spawn_app().await;

    let (status, body) = post_json(&base, "/api/tools/case", json!({ "text": "hello big world", "style": "kebab" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "result": "hello-big-world" }));

    let (_, body) = post_json(&base, "/api/tools/whitespace", json!({ "text": "  a   b  ", "mode": "extra" })).await;
    assert_eq!(body["result"], json!("a b"));

    let (_, body) = post_json(&base, "/api/tools/sort", json!({ "text": "10\n9\n100", "order": "numerical" })).await;
    assert_eq!(body["result"], json!("9\n10\n100"));

    let (_, body) = post_json(&base, "/api/tools/summarize", json!({ "text": "One. Two. Three. Four." })).await;
    assert_eq!(body["result"], json!("One. Two. Three."));

    let (_, body) = post_json(&base, "/api/tools/count", json!({ "text": "Two words." })).await;
    assert_eq!(body["words"], json!(2));
    assert_eq!(body["sentences"], json!(1));
}

#[tokio::test]
async fn unknown_tool_is_not_found() {
    let base = spawn_app().await;
    let (status, body) = post_json(&base, "/api/tools/grammar", json!({ "text": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Unknown tool" }));
}

#[tokio::test]
async fn health_reports_version() {
    let base = spawn_app().await;
    let body: Value = reqwest::get(format!("{}/health", base)).await.unwrap().json().await.unwrap();
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["version"], json!(env!("CARGO_PKG_VERSION")));
}
