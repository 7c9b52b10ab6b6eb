mod assemble;
mod eligibility;
mod quality;
mod radius;
pub mod scoring;

use crate::config::ScoringConfig;
use crate::models::{Place, TripQuery, TripResponse};

/// The drive-mode suggestion pipeline: eligibility → quality gate → radius
/// expansion → scoring → assembly. Pure per request: one immutable pool
/// snapshot and one query in, one response out, no shared state.
pub struct SuggestEngine {
    config: ScoringConfig,
}

impl SuggestEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn suggest(&self, pool: &[Place], query: &TripQuery) -> TripResponse {
        let eligible = eligibility::filter(pool, query, &self.config);
        let eligible_count = eligible.len();
        tracing::debug!(
            pool_size = pool.len(),
            eligible = eligible_count,
            category = %query.category,
            "Eligibility pass complete"
        );

        let gated = quality::apply_gate(eligible, query.style, &self.config);
        tracing::debug!(gated = gated.len(), style = %query.style, "Quality gate applied");

        let mut expansion = radius::expand(gated, query.budget_minutes, &self.config);
        let candidates = std::mem::take(&mut expansion.candidates);

        let ranked = scoring::rank(candidates, query.budget_minutes, query.style, &self.config);
        if let Some(best) = ranked.first() {
            tracing::info!(
                top = %best.place.name,
                score = best.score,
                eta_min = best.eta_minutes.round(),
                widened = expansion.widened,
                "Suggestion computed"
            );
        } else {
            tracing::info!(
                pool_size = pool.len(),
                eligible = eligible_count,
                "No candidate survived the pipeline"
            );
        }

        assemble::assemble(
            &ranked,
            &expansion,
            query,
            &self.config,
            pool.len(),
            eligible_count,
        )
    }
}
