use crate::datasets::PlaceSource;
use crate::error::{AppError, Result};
use crate::models::trip::TripRequest;
use crate::models::TripResponse;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /trips/suggest
/// Pick a best destination and ranked alternatives for a drive-mode trip
pub async fn suggest_trip(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TripRequest>,
) -> Result<Json<TripResponse>> {
    // Validate and canonicalize before touching any dataset
    let query = request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        lat = query.origin.lat,
        lon = query.origin.lon,
        budget_min = query.budget_minutes,
        mode = %query.mode,
        category = %query.category,
        style = %query.style,
        excluded = query.excluded.len(),
        "Trip suggestion request: ({:.4}, {:.4}), {:.0} min, category={}, style={}",
        query.origin.lat, query.origin.lon,
        query.budget_minutes, query.category, query.style
    );

    let places = state.datasets.places().await?;
    let response = state.engine.suggest(&places, &query);

    Ok(Json(response))
}
