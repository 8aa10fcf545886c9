//! End-to-end tests against a real listener on an ephemeral port.
//!
//! Run with: cargo test --test http_server
use std::net::SocketAddr;

use chrono::DateTime;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use pipeline_greeter::config::AppConfig;
use pipeline_greeter::http::{bind, serve};
use pipeline_greeter::templates::init_templates;
use pipeline_greeter::{create_router, AppState};

/// Start a server for `config` on 127.0.0.1 with an OS-assigned port.
async fn spawn_server(mut config: AppConfig) -> SocketAddr {
    config.http.host = "127.0.0.1".to_string();
    config.http.port = 0;

    let listener = bind(&config).await.expect("bind test listener");
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::new(config, init_templates().unwrap()));

    tokio::spawn(async move {
        serve(listener, app).await.expect("test server");
    });

    addr
}

#[tokio::test]
async fn index_shows_local_build_by_default() {
    let addr = spawn_server(AppConfig::default().with_build_label(None)).await;

    let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.unwrap();
    assert!(body.contains("Build: local"));
    assert!(body.contains("Version: 1.0.0"));
}

#[tokio::test]
async fn index_shows_configured_build_number() {
    let addr = spawn_server(AppConfig::default().with_build_label(Some("42".to_string()))).await;

    let body = reqwest::get(format!("http://{}/", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Build: 42"));
}

#[tokio::test]
async fn health_status_line_and_body() {
    let addr = spawn_server(AppConfig::default()).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200 OK\r\n"));
    let (head, body) = raw.split_once("\r\n\r\n").unwrap();
    assert!(head.to_ascii_lowercase().contains("content-type: application/json"));

    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert!(DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn unknown_path_is_404() {
    let addr = spawn_server(AppConfig::default()).await;

    let response = reqwest::get(format!("http://{}/nonexistent", addr))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}
