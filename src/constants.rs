//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For quality-critical tuning knobs that benefit from runtime experimentation,
//! see [`ScoringConfig`](crate::config::ScoringConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Dataset defaults ---

/// Default directory holding the pre-built JSON datasets. Overridden by `DATA_DIR`.
pub const DEFAULT_DATA_DIR: &str = "./data";
/// Default dataset snapshot cache TTL: 5 minutes. Overridden by `DATASET_CACHE_TTL`.
/// Datasets are rebuilt offline, so a short TTL picks up redeploys quickly.
pub const DEFAULT_DATASET_CACHE_TTL_SECONDS: u64 = 300;
/// Maximum entries for the in-memory dataset snapshot cache (one per file).
pub const DATASET_CACHE_MAX_ENTRIES: u64 = 16;

/// Required place dataset file, relative to the data directory.
pub const PLACES_DATASET: &str = "places.json";
/// Optional supplementary place datasets merged into the pool when present.
/// The offline build pipeline emits these as separate files.
pub const EXTRA_PLACE_DATASETS: [&str; 4] =
    ["nature.json", "wineries.json", "spas.json", "family.json"];

/// Hub dataset for the plane mode.
pub const AIRPORTS_DATASET: &str = "airports.json";
/// Hub dataset for the train mode.
pub const TRAIN_STATIONS_DATASET: &str = "train_stations.json";
/// Hub dataset for the bus mode.
pub const BUS_TERMINALS_DATASET: &str = "bus_terminals.json";

// --- Driving speed table (km/h) ---
// Average speeds keyed on the terrain signal derived from a place's kind and
// tags. A proxy for road quality, not a routing engine: mountain destinations
// are reached on winding provincial roads, coastal and urban ones mostly on
// highways.

/// Average driving speed towards mountainous destinations.
pub const CAR_SPEED_MOUNTAIN_KMH: f64 = 55.0;
/// Average driving speed towards coastal or urban destinations.
pub const CAR_SPEED_COASTAL_KMH: f64 = 75.0;
/// Average driving speed when the terrain signal is inconclusive.
pub const CAR_SPEED_MIXED_KMH: f64 = 65.0;

// --- Hub-to-hub leg estimates ---
// minutes = distance / cruise_speed * 60 + boarding overhead, clamped to a
// realistic per-mode range. Keeps extreme distances from producing sub-minute
// or multi-day nonsense.

/// Cruise speed for the flight main leg.
pub const PLANE_CRUISE_KMH: f64 = 750.0;
/// Check-in, security and boarding overhead added to every flight leg.
pub const PLANE_OVERHEAD_MIN: f64 = 90.0;
/// No flight leg is estimated below one hour door to door.
pub const PLANE_ETA_MIN_MINUTES: f64 = 60.0;
/// No flight leg is estimated above 40 hours.
pub const PLANE_ETA_MAX_MINUTES: f64 = 2_400.0;

/// Average speed for the rail main leg (regional/high-speed mix).
pub const TRAIN_AVG_KMH: f64 = 130.0;
/// Platform and boarding overhead for rail legs.
pub const TRAIN_OVERHEAD_MIN: f64 = 20.0;
/// Lower clamp for rail leg estimates.
pub const TRAIN_ETA_MIN_MINUTES: f64 = 15.0;
/// Upper clamp for rail leg estimates.
pub const TRAIN_ETA_MAX_MINUTES: f64 = 1_500.0;

/// Average speed for the coach main leg.
pub const BUS_AVG_KMH: f64 = 80.0;
/// Terminal and boarding overhead for coach legs.
pub const BUS_OVERHEAD_MIN: f64 = 15.0;
/// Lower clamp for coach leg estimates.
pub const BUS_ETA_MIN_MINUTES: f64 = 20.0;
/// Upper clamp for coach leg estimates.
pub const BUS_ETA_MAX_MINUTES: f64 = 1_800.0;

// --- Hub eligibility ---
// Minimum hub-to-hub distance per mode. A destination hub closer than this is
// not worth the main leg (nobody flies to the next town over).

/// Minimum great-circle distance between origin and destination airports.
pub const MIN_HUB_DISTANCE_PLANE_KM: f64 = 150.0;
/// Minimum great-circle distance between origin and destination stations.
pub const MIN_HUB_DISTANCE_TRAIN_KM: f64 = 30.0;
/// Minimum great-circle distance between origin and destination terminals.
pub const MIN_HUB_DISTANCE_BUS_KM: f64 = 20.0;

// --- Response payload bounds ---

/// Maximum justification strings per suggestion.
pub const MAX_WHY_REASONS: usize = 4;
/// Maximum tags echoed back per suggestion.
pub const MAX_SUGGESTION_TAGS: usize = 10;
