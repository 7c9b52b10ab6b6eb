use crate::config::ScoringConfig;
use crate::models::{Place, ScoredCandidate, TripQuery};
use crate::services::eta;

/// Reduce the full place pool to structurally valid, not-yet-seen,
/// far-enough, category-matching candidates.
///
/// Order matters: the distance from the origin is computed before the
/// category check because the ETA is needed by every later stage regardless
/// of category. Malformed records are dropped silently; one bad row never
/// fails the request.
pub fn filter(pool: &[Place], query: &TripQuery, config: &ScoringConfig) -> Vec<ScoredCandidate> {
    pool.iter()
        .filter_map(|place| {
            if !place.is_valid() {
                tracing::debug!(id = %place.id, "Dropping structurally invalid place record");
                return None;
            }
            if query.excluded.contains(&place.id) {
                return None;
            }

            let distance_km = query.origin.distance_to(&place.coordinates());
            // The point is suggesting somewhere to go, not where the user is
            if distance_km < config.min_trip_distance_km {
                return None;
            }
            if !query.category.matches(place) {
                return None;
            }

            let eta_minutes = eta::estimate_drive_minutes(distance_km, place);
            Some(ScoredCandidate {
                place: place.clone(),
                distance_km,
                eta_minutes,
                quality: 0.0,
                score: 0.0,
            })
        })
        .collect()
}
