//! Expiring List - lazily purged time-to-live lists
//!
//! Provides two interchangeable list backings whose entries expire a fixed
//! time after insertion, plus a small HTML line board built on them.

pub mod api;
pub mod config;
pub mod error;
pub mod feed;
pub mod list;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use error::{ListError, Result};
pub use feed::LineFeed;
pub use list::{ArrayExpiringList, ExpiringList, LinkedExpiringList};
