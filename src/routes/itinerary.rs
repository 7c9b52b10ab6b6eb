use crate::datasets::PlaceSource;
use crate::error::{AppError, Result};
use crate::models::hub::ItineraryResponse;
use crate::models::trip::ItineraryRequest;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /trips/itinerary
/// Hub-to-hub suggestions for the plane/train/bus modes
pub async fn plan_itinerary(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ItineraryRequest>,
) -> Result<Json<ItineraryResponse>> {
    let query = request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        lat = query.origin.lat,
        lon = query.origin.lon,
        budget_min = query.budget_minutes,
        mode = %query.mode,
        "Itinerary request: ({:.4}, {:.4}), {:.0} min, mode={}",
        query.origin.lat, query.origin.lon, query.budget_minutes, query.mode
    );

    let hubs = state.datasets.hubs(query.mode).await?;
    let response = state.hub_matcher.plan(&hubs, &query);

    Ok(Json(response))
}
