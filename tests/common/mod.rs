use scappata::config::ScoringConfig;
use scappata::datasets::{FileDatasetStore, PlaceSource};
use scappata::services::itinerary::HubMatcher;
use scappata::services::suggest::SuggestEngine;
use scappata::AppState;
use serde_json::{json, Value};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Build a router backed by a temp dataset directory. The TempDir must stay
/// alive for the lifetime of the router, so it is returned alongside it.
#[allow(dead_code)]
pub fn app_with_data_dir(dir: TempDir) -> (axum::Router, TempDir) {
    let datasets: Arc<dyn PlaceSource> =
        Arc::new(FileDatasetStore::new(dir.path().to_path_buf(), 3600));
    let config = ScoringConfig::default();
    let state = Arc::new(AppState {
        datasets,
        engine: SuggestEngine::new(config.clone()),
        hub_matcher: HubMatcher::new(config),
    });

    (scappata::routes::create_router(state), dir)
}

/// Write one dataset file into the temp directory.
#[allow(dead_code)]
pub fn write_dataset(dir: &TempDir, file: &str, records: &Value) {
    fs::write(dir.path().join(file), serde_json::to_vec(records).unwrap()).unwrap();
}

/// A JSON place record for dataset fixtures.
#[allow(dead_code)]
pub fn place_record(id: &str, name: &str, kind: &str, lat: f64, lon: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": kind,
        "lat": lat,
        "lon": lon,
        "tags": [],
        "visibility": "well-known"
    })
}

/// A small pool around L'Aquila: enough variety for the happy-path and
/// exclusion tests without being a real dataset.
#[allow(dead_code)]
pub fn default_places() -> Value {
    json!([
        place_record("sulmona", "Sulmona", "city", 42.048, 13.926),
        place_record("scanno", "Scanno", "village", 41.903, 13.881),
        place_record("pescara", "Pescara", "city", 42.461, 14.216),
        place_record("campo-imperatore", "Campo Imperatore", "mountain", 42.442, 13.758),
        place_record("santo-stefano", "Santo Stefano di Sessanio", "village", 42.342, 13.645),
        place_record("roccaraso", "Roccaraso", "mountain", 41.846, 14.078),
    ])
}

/// A small airport pool for the itinerary tests.
#[allow(dead_code)]
pub fn default_airports() -> Value {
    json!([
        {"code": "PSR", "name": "Abruzzo Airport", "lat": 42.437, "lon": 14.181},
        {"code": "FCO", "name": "Roma Fiumicino", "lat": 41.800, "lon": 12.239},
        {"code": "NAP", "name": "Napoli Capodichino", "lat": 40.884, "lon": 14.291},
        {"code": "MXP", "name": "Milano Malpensa", "lat": 45.630, "lon": 8.723}
    ])
}
