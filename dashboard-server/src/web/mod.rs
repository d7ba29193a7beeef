//! Web layer for the transit dashboard.
//!
//! Serves the line pages with their widgets, the date-picker navigation
//! endpoint, and a JSON API over the station resolver.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
