//! API Routes
//!
//! Configures the Axum router with all line board endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, send_handler, show_handler, AppState};
use crate::list::Clock;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET|POST /send?<line>` - Add a line to the board
/// - `GET /show` - Render the live lines
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: Clock + Send + 'static,
{
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/send", get(send_handler::<C>).post(send_handler::<C>))
        .route("/show", get(show_handler::<C>))
        .route("/health", get(health_handler::<C>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
