use crate::datasets::PlaceSource;
use crate::models::trip::HubMode;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if the datasets are deployed and readable
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    // The place pool is required: a deployment without it serves nothing
    match state.datasets.places().await {
        Ok(places) => {
            status["checks"]["places"] = json!(places.len());
        }
        Err(e) => {
            status["checks"]["places"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    // Hub datasets are optional (a car-only deployment is valid)
    for (mode, key) in [
        (HubMode::Plane, "airports"),
        (HubMode::Train, "train_stations"),
        (HubMode::Bus, "bus_terminals"),
    ] {
        match state.datasets.hubs(mode).await {
            Ok(hubs) => {
                status["checks"][key] = json!(hubs.len());
            }
            Err(_) => {
                status["checks"][key] = json!("absent");
            }
        }
    }

    Json(status)
}
