//! Response models for the line board
//!
//! HTML page bodies for the board endpoints and the JSON health response.

pub mod pages;
pub mod responses;

// Re-export commonly used types
pub use pages::{added_page, prompt_page};
pub use responses::HealthResponse;
