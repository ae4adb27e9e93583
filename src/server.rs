use crate::apis::TikTokApi;
use crate::constants::TIKWM_API_NAME;
use crate::error::GatewayError;
use crate::normalizer::{normalize_user, normalize_video_list};
use crate::types::SaveCountVariant;
use axum::{
    extract::Query,
    http::{Method, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Extension, Router,
};
use hyper::Server;
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

#[derive(Deserialize)]
struct UserQuery {
    username: Option<String>,
}

#[derive(Deserialize)]
struct SearchQuery {
    keyword: Option<String>,
}

/// 400 response for a missing required query parameter
fn validation_error(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "success": false, "message": message })),
    )
        .into_response()
}

/// 500 envelope for upstream, transport, and mapping failures
fn failure(message: &str, err: GatewayError) -> Response {
    error!("{}: {}", message, err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "success": false,
            "message": message,
            "error": err.to_string(),
        })),
    )
        .into_response()
}

/// GET /api/tiktok/user
async fn user_profile(
    Extension(api): Extension<Arc<dyn TikTokApi>>,
    Query(query): Query<UserQuery>,
) -> Response {
    let username = match query.username {
        Some(u) if !u.is_empty() => u,
        _ => return validation_error("Please provide a TikTok username"),
    };

    let result = match api.user_info(&username).await {
        Ok(raw) => normalize_user(&raw),
        Err(e) => Err(e),
    };
    match result {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => failure("Failed to fetch TikTok user information", e),
    }
}

/// GET /api/tiktok/user/videos
async fn user_videos(
    Extension(api): Extension<Arc<dyn TikTokApi>>,
    Query(query): Query<UserQuery>,
) -> Response {
    let username = match query.username {
        Some(u) if !u.is_empty() => u,
        _ => return validation_error("Please provide a TikTok username"),
    };

    let result = match api.user_posts(&username).await {
        Ok(raw) => normalize_video_list(&raw, SaveCountVariant::Download),
        Err(e) => Err(e),
    };
    match result {
        Ok(videos) => Json(videos).into_response(),
        Err(e) => failure("Failed to fetch user videos", e),
    }
}

/// GET /api/tiktok/search
async fn search_videos(
    Extension(api): Extension<Arc<dyn TikTokApi>>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let keyword = match query.keyword {
        Some(k) if !k.is_empty() => k,
        _ => return validation_error("Please provide a search keyword"),
    };

    let result = match api.search(&keyword).await {
        Ok(raw) => normalize_video_list(&raw, SaveCountVariant::Download),
        Err(e) => Err(e),
    };
    match result {
        Ok(videos) => Json(videos).into_response(),
        Err(e) => failure("Failed to search TikTok videos", e),
    }
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "api": TIKWM_API_NAME,
    }))
}

/// Root status page with a client-side uptime ticker
async fn status_page() -> impl IntoResponse {
    let html = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>TikTok Gateway Status</title>
    <style>
      body {
        font-family: sans-serif;
        background: #111;
        color: #eee;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        height: 100vh;
        margin: 0;
      }
      .card {
        background: #222;
        padding: 2rem;
        border-radius: 1rem;
        box-shadow: 0 0 15px rgba(0, 255, 170, 0.2);
      }
      h1 { margin-bottom: 1rem; }
      .info { font-size: 1.2rem; }
    </style>
  </head>
  <body>
    <div class="card">
      <h1>&#128737;&#65039; TikTok Gateway Status</h1>
      <div class="info" id="status">Loading...</div>
    </div>
    <script>
      const startTime = Date.now();
      function formatUptime(ms) {
        const sec = Math.floor(ms / 1000) % 60;
        const min = Math.floor(ms / (1000 * 60)) % 60;
        const hr = Math.floor(ms / (1000 * 60 * 60)) % 24;
        const day = Math.floor(ms / (1000 * 60 * 60 * 24));
        return `${day}d ${hr}h ${min}m ${sec}s`;
      }
      function updateStatus() {
        const uptime = formatUptime(Date.now() - startTime);
        document.getElementById('status').textContent = `API is online - Uptime: ${uptime}`;
      }
      updateStatus();
      setInterval(updateStatus, 1000);
    </script>
  </body>
</html>"#;
    Html(html)
}

/// Create the HTTP server with all routes
pub fn create_server(api: Arc<dyn TikTokApi>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(status_page))
        .route("/health", get(health))
        .route("/api/tiktok/user", get(user_profile))
        .route("/api/tiktok/user/videos", get(user_videos))
        .route("/api/tiktok/search", get(search_videos))
        .layer(Extension(api))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(api: Arc<dyn TikTokApi>, port: u16) -> anyhow::Result<()> {
    let api_name = api.api_name();
    let app = create_server(api);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    println!("🚀 HTTP server running on http://localhost:{port}");
    println!("💚 Health check: http://localhost:{port}/health");
    println!("📡 Upstream API: {api_name}");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
