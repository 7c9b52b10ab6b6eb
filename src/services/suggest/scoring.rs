use crate::config::ScoringConfig;
use crate::models::{PlaceKind, ScoredCandidate, Style, Visibility};
use std::cmp::Ordering;

/// Time-fit in [0, 1]: 1.0 at an exact budget match, decaying linearly to
/// zero as |eta − target| grows past the tolerance half-width. The width
/// scales with the budget so longer trips tolerate larger deviations, with
/// a floor for short ones.
///
/// Shared by the drive pipeline and the hub matcher.
pub fn time_fit(eta_minutes: f64, target_minutes: f64, config: &ScoringConfig) -> f64 {
    let width = (target_minutes * config.time_fit_width_factor).max(config.time_fit_floor_minutes);
    (1.0 - (eta_minutes - target_minutes).abs() / width).clamp(0.0, 1.0)
}

fn score_candidate(
    candidate: &ScoredCandidate,
    target_minutes: f64,
    style: Style,
    config: &ScoringConfig,
) -> f64 {
    let fit = time_fit(candidate.eta_minutes, target_minutes, config);
    let mut score = config.time_weight * fit + config.quality_weight * candidate.quality;

    // Step penalty, deliberately discontinuous: a trip far off the promised
    // time is a broken promise, not a slightly worse fit.
    let ratio = candidate.eta_minutes / target_minutes;
    if ratio < config.out_of_band_low || ratio > config.out_of_band_high {
        score -= config.out_of_band_penalty;
    }

    // Asking for gems and getting the obvious big city is a miss
    if style == Style::Gem
        && candidate.place.kind == PlaceKind::City
        && candidate.place.visibility == Visibility::WellKnown
    {
        score -= config.gem_city_penalty;
    }

    score
}

/// Score every candidate and sort descending. The sort is stable, so ties
/// keep their input order and identical input produces identical ranking.
pub fn rank(
    candidates: Vec<ScoredCandidate>,
    target_minutes: f64,
    style: Style,
    config: &ScoringConfig,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let score = score_candidate(&candidate, target_minutes, style, config);
            ScoredCandidate { score, ..candidate }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}
