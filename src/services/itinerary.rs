//! Hub-to-hub itinerary matching for the plane/train/bus modes.
//!
//! A deliberately simpler sibling of the drive pipeline: nearest-hub lookup
//! is a linear scan (pools are a few hundred hubs), the main-leg estimate
//! comes from [`eta::estimate_hub_leg_minutes`], and scoring blends the
//! shared time-fit with a preference for geographically nearer destinations.

use crate::config::ScoringConfig;
use crate::constants::*;
use crate::models::hub::{Hub, HubView, ItineraryDebug, ItineraryOption, ItineraryResponse};
use crate::models::suggestion::round3;
use crate::models::trip::{HubMode, ItineraryQuery};
use crate::services::eta;
use crate::services::suggest::scoring;
use std::cmp::Ordering;
use std::collections::HashSet;

struct HubCandidate<'a> {
    hub: &'a Hub,
    distance_km: f64,
    eta_minutes: f64,
    fit: f64,
    score: f64,
}

pub struct HubMatcher {
    config: ScoringConfig,
}

impl HubMatcher {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    fn min_hub_distance_km(mode: HubMode) -> f64 {
        match mode {
            HubMode::Plane => MIN_HUB_DISTANCE_PLANE_KM,
            HubMode::Train => MIN_HUB_DISTANCE_TRAIN_KM,
            HubMode::Bus => MIN_HUB_DISTANCE_BUS_KM,
        }
    }

    /// Leg summary per mode: code pair for flights, name pair for rail and
    /// coach.
    fn summary(mode: HubMode, from: &Hub, to: &Hub) -> String {
        match mode {
            HubMode::Plane => format!("{} → {}", from.label(), to.label()),
            HubMode::Train | HubMode::Bus => format!("{} → {}", from.name, to.name),
        }
    }

    /// Dedup by identity key, keeping the first occurrence. Prevents the
    /// same physical hub from competing against itself under name/code
    /// variants.
    fn dedup<'a>(hubs: &'a [Hub]) -> Vec<&'a Hub> {
        let mut seen: HashSet<String> = HashSet::new();
        hubs.iter()
            .filter(|hub| hub.is_valid() && seen.insert(hub.identity_key()))
            .collect()
    }

    pub fn plan(&self, hubs: &[Hub], query: &ItineraryQuery) -> ItineraryResponse {
        let pool = Self::dedup(hubs);
        tracing::debug!(
            pool_size = hubs.len(),
            deduped = pool.len(),
            mode = %query.mode,
            "Hub pool prepared"
        );

        let origin_hub = pool.iter().copied().min_by(|a, b| {
            query
                .origin
                .distance_to(&a.coordinates())
                .partial_cmp(&query.origin.distance_to(&b.coordinates()))
                .unwrap_or(Ordering::Equal)
        });

        let origin_hub = match origin_hub {
            Some(hub) => hub,
            None => {
                return ItineraryResponse {
                    ok: true,
                    top: None,
                    alternatives: vec![],
                    message: Some("No departure hub available for this mode.".to_string()),
                    debug: ItineraryDebug {
                        pool_size: hubs.len(),
                        reachable: 0,
                        mode: query.mode.to_string(),
                        origin_hub: None,
                    },
                };
            }
        };

        let origin_key = origin_hub.identity_key();
        let origin_coords = origin_hub.coordinates();
        let min_distance = Self::min_hub_distance_km(query.mode);

        // First pass: distance/ETA eligibility and time-fit
        let mut candidates: Vec<HubCandidate> = pool
            .iter()
            .copied()
            .filter(|hub| hub.identity_key() != origin_key)
            .filter_map(|hub| {
                let distance_km = origin_coords.distance_to(&hub.coordinates());
                // A main leg shorter than this is not worth boarding for
                if distance_km < min_distance {
                    return None;
                }
                let eta_minutes = eta::estimate_hub_leg_minutes(distance_km, query.mode);
                if eta_minutes > query.budget_minutes {
                    return None;
                }
                let fit = scoring::time_fit(eta_minutes, query.budget_minutes, &self.config);
                Some(HubCandidate {
                    hub,
                    distance_km,
                    eta_minutes,
                    fit,
                    score: 0.0,
                })
            })
            .collect();

        // Second pass: proximity preference normalized over the reachable
        // set, blended with time-fit
        let min_dist = candidates
            .iter()
            .map(|c| c.distance_km)
            .fold(f64::INFINITY, f64::min);
        let max_dist = candidates
            .iter()
            .map(|c| c.distance_km)
            .fold(f64::NEG_INFINITY, f64::max);
        let weight = self.config.hub_proximity_weight;
        for candidate in &mut candidates {
            let proximity = if max_dist > min_dist {
                1.0 - (candidate.distance_km - min_dist) / (max_dist - min_dist)
            } else {
                0.5
            };
            candidate.score = (1.0 - weight) * candidate.fit + weight * proximity;
        }

        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        let reachable = candidates.len();

        let mut options = candidates.iter().map(|candidate| ItineraryOption {
            from: HubView::from(origin_hub),
            to: HubView::from(candidate.hub),
            summary: Self::summary(query.mode, origin_hub, candidate.hub),
            eta_min: candidate.eta_minutes.round() as i64,
            distance_km: candidate.distance_km.round() as i64,
            score: round3(candidate.score),
        });

        let top = options.next();
        let alternatives: Vec<ItineraryOption> =
            options.take(self.config.max_alternatives).collect();

        let message = if top.is_none() {
            Some(format!(
                "No {} destination is reachable within your time budget.",
                query.mode
            ))
        } else {
            None
        };

        if let Some(ref best) = top {
            tracing::info!(
                origin = %origin_hub.name,
                summary = %best.summary,
                reachable,
                "Itinerary computed"
            );
        }

        ItineraryResponse {
            ok: true,
            top,
            alternatives,
            message,
            debug: ItineraryDebug {
                pool_size: hubs.len(),
                reachable,
                mode: query.mode.to_string(),
                origin_hub: Some(origin_hub.name.clone()),
            },
        }
    }
}
