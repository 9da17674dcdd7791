//! API Handlers
//!
//! HTTP request handlers for the line board endpoints.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::{RawQuery, State},
    response::Html,
    Json,
};
use tracing::{info, warn};

use crate::feed::LineFeed;
use crate::list::{Clock, SystemClock};
use crate::models::{added_page, prompt_page, HealthResponse};

/// Application state shared across all handlers.
///
/// Holds the single line feed of the process. The feed itself is not
/// synchronized, so every handler goes through the mutex.
pub struct AppState<C = SystemClock> {
    /// The board's line feed
    pub feed: Arc<Mutex<LineFeed<C>>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            feed: Arc::clone(&self.feed),
        }
    }
}

impl AppState {
    /// Creates a new AppState from configuration.
    ///
    /// Initializes the line feed with the configured line lifetime.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(LineFeed::new(config.line_lifetime_ms))
    }
}

impl<C: Clock> AppState<C> {
    /// Creates a new AppState owning the given feed.
    pub fn new(feed: LineFeed<C>) -> Self {
        Self {
            feed: Arc::new(Mutex::new(feed)),
        }
    }
}

/// Handler for GET/POST /send
///
/// Adds the raw, undecoded query string to the board. A request without a
/// query string gets the prompt page and still adds an absent line.
pub async fn send_handler<C>(
    State(state): State<AppState<C>>,
    RawQuery(query): RawQuery,
) -> Html<String>
where
    C: Clock + Send + 'static,
{
    let page = match query.as_deref() {
        Some(line) => added_page(line),
        None => prompt_page().to_string(),
    };

    state.feed.lock().await.add_line(query);
    Html(page)
}

/// Handler for GET /show
///
/// Renders every live line, or an empty body if lines expired mid-render.
pub async fn show_handler<C>(State(state): State<AppState<C>>) -> Html<String>
where
    C: Clock + Send + 'static,
{
    let rendered = state.feed.lock().await.render_all();
    match rendered {
        Ok(page) => Html(page),
        Err(err) => {
            warn!("Rendering the board failed, sending empty body: {}", err);
            Html(String::new())
        }
    }
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler<C>(State(state): State<AppState<C>>) -> Json<HealthResponse>
where
    C: Clock + Send + 'static,
{
    let lines = state.feed.lock().await.len();
    info!("Health check: {} lines on the board", lines);
    Json(HealthResponse::healthy(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ManualClock;

    fn test_state() -> (AppState<ManualClock>, ManualClock) {
        let clock = ManualClock::new(0);
        let state = AppState::new(LineFeed::with_clock(10_000, clock.clone()));
        (state, clock)
    }

    #[tokio::test]
    async fn test_send_and_show_handler() {
        let (state, _clock) = test_state();

        let page = send_handler(State(state.clone()), RawQuery(Some("hello".to_string()))).await;
        assert!(page.0.contains("<pre>hello</pre>"));

        let page = show_handler(State(state)).await;
        assert_eq!(page.0, "<h1><pre>hello\n</pre></h1>");
    }

    #[tokio::test]
    async fn test_send_without_query_still_adds() {
        let (state, _clock) = test_state();

        let page = send_handler(State(state.clone()), RawQuery(None)).await;
        assert_eq!(page.0, prompt_page());
        assert_eq!(state.feed.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_show_after_lifetime() {
        let (state, clock) = test_state();
        send_handler(State(state.clone()), RawQuery(Some("bye".to_string()))).await;

        clock.advance(10_001);
        let page = show_handler(State(state)).await;
        assert_eq!(page.0, "<h1><pre></pre></h1>");
    }

    #[tokio::test]
    async fn test_health_handler() {
        let (state, _clock) = test_state();

        let response = health_handler(State(state)).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.lines, 0);
    }
}
