use crate::config::ScoringConfig;
use crate::models::ScoredCandidate;
use std::cmp::Ordering;

/// Outcome of the progressive time-cap expansion.
#[derive(Debug)]
pub struct Expansion {
    pub candidates: Vec<ScoredCandidate>,
    /// The accepted cap as a multiplier of the budget; `None` when the
    /// closest-N fallback was used.
    pub cap_multiplier: Option<f64>,
    /// True when the accepted set actually extends past the honesty
    /// threshold, so the caller can surface "I had to widen the search".
    pub widened: bool,
}

/// Try a fixed ascending ladder of time caps against the budget, stopping at
/// the first cap that keeps enough candidates. When no cap reaches the
/// minimum count, keep the N closest by ETA from the whole pool instead:
/// a non-empty input always produces a non-empty result.
pub fn expand(
    mut pool: Vec<ScoredCandidate>,
    budget_minutes: f64,
    config: &ScoringConfig,
) -> Expansion {
    let honesty_cap = budget_minutes * config.honesty_threshold;

    for &multiplier in &config.radius_multipliers {
        let cap = budget_minutes * multiplier;
        let within: Vec<ScoredCandidate> = pool
            .iter()
            .filter(|c| c.eta_minutes <= cap)
            .cloned()
            .collect();

        if within.len() >= config.min_candidates {
            let widened = within.iter().any(|c| c.eta_minutes > honesty_cap);
            tracing::debug!(
                cap_multiplier = multiplier,
                kept = within.len(),
                "Radius ladder satisfied"
            );
            return Expansion {
                candidates: within,
                cap_multiplier: Some(multiplier),
                widened,
            };
        }
    }

    // No cap reached the minimum count: closest-N fallback
    pool.sort_by(|a, b| {
        a.eta_minutes
            .partial_cmp(&b.eta_minutes)
            .unwrap_or(Ordering::Equal)
    });
    pool.truncate(config.fallback_count);
    let widened = pool.iter().any(|c| c.eta_minutes > honesty_cap);
    tracing::debug!(kept = pool.len(), "Radius ladder exhausted, using closest-N fallback");

    Expansion {
        candidates: pool,
        cap_multiplier: None,
        widened,
    }
}
