//! API 路由定义

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handlers, state::AppState};

/// 完整的应用路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/beu-result", get(handlers::beu_result))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
