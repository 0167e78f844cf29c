use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    extract::{Path as UrlPath, State},
    http::{Method, StatusCode},
    routing::get,
    Json, Router,
};
use postfetch_engine::Post;
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info};

struct AppState {
    posts: Vec<Post>,
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    posts: usize,
}

async fn list_posts(State(state): State<Arc<AppState>>) -> Json<Vec<Post>> {
    debug!("serving {} posts", state.posts.len());
    Json(state.posts.clone())
}

async fn get_post(
    State(state): State<Arc<AppState>>,
    UrlPath(id): UrlPath<i64>,
) -> Result<Json<Post>, (StatusCode, String)> {
    state
        .posts
        .iter()
        .find(|post| post.id == id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("no post with id {}", id)))
}

async fn healthz(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        posts: state.posts.len(),
    })
}

/// Routes of the local JSON server, serving `posts` read-only.
pub fn router(posts: Vec<Post>) -> Router {
    let state = Arc::new(AppState { posts });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/:id", get(get_post))
        .route("/healthz", get(healthz))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Reads a JSON array of posts, the same shape `GET /posts` returns.
pub fn load_posts(path: &Path) -> Result<Vec<Post>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    let posts = serde_json::from_str(&json)
        .with_context(|| format!("failed to deserialize posts from `{}`", path.display()))?;
    Ok(posts)
}

pub async fn serve(listener: TcpListener, posts: Vec<Post>) -> Result<()> {
    let addr = listener.local_addr().context("listener has no local address")?;
    info!("serving {} posts on http://{}", posts.len(), addr);
    axum::serve(listener, router(posts))
        .await
        .context("server error")
}
