use std::collections::HashMap;

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use feroauth_wui::config::{ClientConfig, Config};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub const SESSION_COOKIE: &str = "id=valid";

// Session endpoint that only answers callers presenting the session cookie.
async fn session_info(headers: HeaderMap) -> impl IntoResponse {
    let authorized = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|cookies| cookies.split(';').any(|c| c.trim() == SESSION_COOKIE));

    if authorized {
        (StatusCode::OK, Json(json!({"uuid": "abc", "name": "Ann"}))).into_response()
    } else {
        StatusCode::FORBIDDEN.into_response()
    }
}

pub fn session_router() -> Router {
    Router::new().route("/api/session/info", get(session_info))
}

// Helper function to spawn a test server on a random port
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("failed to run server");
    });

    format!("http://{addr}")
}

/// Answers one request with a 200 that promises more body than it sends, then
/// closes the connection.
pub async fn spawn_truncated_body_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("failed to accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.expect("failed to read request");
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 100\r\n\r\n{\"uu",
            )
            .await
            .expect("failed to write response");
        socket.shutdown().await.ok();
    });

    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn client_config(base_url: &str, cookie: Option<&str>) -> ClientConfig {
    let mut vars = HashMap::new();
    vars.insert("client.base_url".to_string(), base_url.to_string());
    if let Some(cookie) = cookie {
        vars.insert("client.cookie".to_string(), cookie.to_string());
    }
    Config::load_with_sources(Some(vars))
        .expect("Failed to load config")
        .client
}
