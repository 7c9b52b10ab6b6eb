pub mod debug;
pub mod itinerary;
pub mod suggest;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/trips/suggest", post(suggest::suggest_trip))
        .route("/trips/itinerary", post(itinerary::plan_itinerary))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
