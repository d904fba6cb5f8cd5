//! Exercise the HTTP endpoint over a real socket

use std::net::SocketAddr;

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::Value;
use star_detector::test_util::{blank_frame, encode_png, fill_rect};
use star_detector::{DetectorConfig, StarsResponse};
use star_server::routes::HealthInfo;
use star_server::{router, AppState};

const MAX_UPLOAD: usize = 1024 * 1024;

async fn spawn_server(config: DetectorConfig) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(AppState { config }, MAX_UPLOAD);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn upload_form(field: &str, bytes: Vec<u8>) -> Form {
    let part = Part::bytes(bytes)
        .file_name("chart.png")
        .mime_str("image/png")
        .unwrap();
    Form::new().part(field.to_string(), part)
}

fn two_star_png() -> Vec<u8> {
    let mut frame = blank_frame(100, 100);
    fill_rect(&mut frame, 8, 8, 5, 5, 255);
    fill_rect(&mut frame, 80, 88, 5, 5, 255);
    encode_png(&frame)
}

#[tokio::test]
async fn test_analyze_returns_sorted_stars() {
    let addr = spawn_server(DetectorConfig::default()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/analyze/"))
        .multipart(upload_form("file", two_star_png()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let stars = body["stars"].as_array().unwrap();
    assert_eq!(stars.len(), 2);
    assert_eq!(stars[0]["soundId"], "button4");
    assert_eq!(stars[0]["timing"], 3.0);
    assert_eq!(stars[0]["y"], 0.9);
    assert_eq!(stars[1]["soundId"], "button1");
    assert_eq!(stars[1]["timing"], 11.0);
    assert_eq!(stars[1]["y"], 0.1);
    assert_eq!(stars[1]["x"], 0.0);

    let parsed: StarsResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.stars.len(), 2);
}

#[tokio::test]
async fn test_corrupt_upload_is_client_error() {
    let addr = spawn_server(DetectorConfig::default()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/analyze/"))
        .multipart(upload_form("file", b"not an image at all".to_vec()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("decode"));
    assert!(body.get("stars").is_none());
}

#[tokio::test]
async fn test_missing_file_field() {
    let addr = spawn_server(DetectorConfig::default()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/analyze/"))
        .multipart(upload_form("image", two_star_png()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("file"));
}

#[tokio::test]
async fn test_non_multipart_body_gets_json_error() {
    let addr = spawn_server(DetectorConfig::default()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/analyze/"))
        .body(two_star_png())
        .send()
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_invalid_config_is_server_error() {
    let addr = spawn_server(DetectorConfig {
        grid_cols: 0,
        ..Default::default()
    })
    .await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/analyze/"))
        .multipart(upload_form("file", two_star_png()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_cross_origin_requests_allowed() {
    let addr = spawn_server(DetectorConfig::default()).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("http://{addr}/analyze/"))
        .header("Origin", "http://chart-client.example")
        .header("Access-Control-Request-Method", "POST")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://chart-client.example")
    );
}

#[tokio::test]
async fn test_health() {
    let addr = spawn_server(DetectorConfig::default()).await;

    let info: HealthInfo = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(info.status, "ok");
    assert_eq!(info.service, "star-server");
}
