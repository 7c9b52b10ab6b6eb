//! Travel-time estimation.
//!
//! A deliberate proxy, not a routing engine: driving time comes from an
//! average-speed table keyed on a terrain signal, hub legs from a cruise
//! speed plus a fixed boarding overhead, clamped to a realistic range.

use crate::constants::*;
use crate::models::place::{Place, PlaceKind};
use crate::models::trip::HubMode;
use crate::services::normalize::normalize;

/// Terrain signal derived from a place's kind and tags. Chooses the average
/// driving speed: winding roads into the mountains, highways to the coast
/// and between cities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainSignal {
    Mountain,
    Coastal,
    Mixed,
}

const MOUNTAIN_MARKERS: &[&str] = &["mountain", "montagna", "monti", "alpine", "ski"];
const COASTAL_MARKERS: &[&str] = &["sea", "mare", "coast", "coastal", "costa", "beach", "spiaggia"];

fn has_marker(place: &Place, markers: &[&str]) -> bool {
    place
        .tags
        .iter()
        .any(|tag| markers.contains(&normalize(tag).as_str()))
}

pub fn terrain_signal(place: &Place) -> TerrainSignal {
    match place.kind {
        PlaceKind::Mountain => TerrainSignal::Mountain,
        PlaceKind::Sea | PlaceKind::City => TerrainSignal::Coastal,
        _ => {
            if has_marker(place, MOUNTAIN_MARKERS) {
                TerrainSignal::Mountain
            } else if has_marker(place, COASTAL_MARKERS) {
                TerrainSignal::Coastal
            } else {
                TerrainSignal::Mixed
            }
        }
    }
}

pub fn car_speed_kmh(signal: TerrainSignal) -> f64 {
    match signal {
        TerrainSignal::Mountain => CAR_SPEED_MOUNTAIN_KMH,
        TerrainSignal::Coastal => CAR_SPEED_COASTAL_KMH,
        TerrainSignal::Mixed => CAR_SPEED_MIXED_KMH,
    }
}

/// Estimated driving time in minutes for the single-leg mode.
pub fn estimate_drive_minutes(distance_km: f64, place: &Place) -> f64 {
    let speed = car_speed_kmh(terrain_signal(place));
    distance_km / speed * 60.0
}

/// Estimated main-leg time in minutes for a hub-to-hub trip: cruise time plus
/// boarding overhead, clamped so extreme distances never produce sub-minute
/// or multi-day estimates.
pub fn estimate_hub_leg_minutes(distance_km: f64, mode: HubMode) -> f64 {
    let (speed_kmh, overhead_min, min_minutes, max_minutes) = match mode {
        HubMode::Plane => (
            PLANE_CRUISE_KMH,
            PLANE_OVERHEAD_MIN,
            PLANE_ETA_MIN_MINUTES,
            PLANE_ETA_MAX_MINUTES,
        ),
        HubMode::Train => (
            TRAIN_AVG_KMH,
            TRAIN_OVERHEAD_MIN,
            TRAIN_ETA_MIN_MINUTES,
            TRAIN_ETA_MAX_MINUTES,
        ),
        HubMode::Bus => (
            BUS_AVG_KMH,
            BUS_OVERHEAD_MIN,
            BUS_ETA_MIN_MINUTES,
            BUS_ETA_MAX_MINUTES,
        ),
    };

    (distance_km / speed_kmh * 60.0 + overhead_min).clamp(min_minutes, max_minutes)
}
