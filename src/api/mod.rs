//! API Module
//!
//! HTTP handlers and routing for the line board.
//!
//! # Endpoints
//! - `GET|POST /send?<line>` - Add the raw query string as a line
//! - `GET /show` - Render the live lines as HTML
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
