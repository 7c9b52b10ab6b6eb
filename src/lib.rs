// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod datasets;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

// App state for sharing across the application
use datasets::PlaceSource;
use services::itinerary::HubMatcher;
use services::suggest::SuggestEngine;
use std::sync::Arc;

pub struct AppState {
    pub datasets: Arc<dyn PlaceSource>,
    pub engine: SuggestEngine,
    pub hub_matcher: HubMatcher,
}
