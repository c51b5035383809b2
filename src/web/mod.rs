//! # Web API
//!
//! axum surface over the leaderboard service and the supplemental statistics.
//! Everything except the banner and health check sits behind API-key
//! authentication.

pub mod handlers;
pub mod middleware;
pub mod response_types;
pub mod state;

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use response_types::{ApiError, ApiResult};
pub use state::AppState;

/// Build the application router
pub fn create_app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/leaderboards", get(handlers::leaderboards::list_leaderboards))
        .route(
            "/leaderboards/{board}",
            get(handlers::leaderboards::get_leaderboard),
        )
        .route("/experience", get(handlers::experience::all_experience))
        .route(
            "/experience/{uuid}",
            get(handlers::experience::player_experience),
        )
        .route(
            "/chat_statistics",
            get(handlers::chat::global_chat_statistics),
        )
        .route(
            "/chat_statistics/{uuid}",
            get(handlers::chat::player_chat_statistics),
        )
        .route("/profile/{uuid}", get(handlers::profile::player_profile))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::require_auth,
        ));

    Router::new()
        .route("/", get(handlers::health::banner))
        .route("/health", get(handlers::health::basic_health))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
