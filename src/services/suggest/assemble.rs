use crate::config::ScoringConfig;
use crate::models::suggestion::{SuggestDebug, Suggestion, TripResponse};
use crate::models::{ScoredCandidate, Style, TripQuery};

use super::radius::Expansion;

/// Message used when the radius had to be widened past the honesty
/// threshold. Surfaced both as the response note and as the first reason on
/// each suggestion.
const WIDENED_NOTE: &str = "We had to look a bit beyond your time budget for these.";

fn synthesize_why(candidate: &ScoredCandidate, style: Style, widened: bool) -> Vec<String> {
    let mut reasons: Vec<String> = Vec::new();
    if widened {
        reasons.push(WIDENED_NOTE.to_string());
    }
    reasons.extend(candidate.place.why.iter().cloned());

    // Pad thin justifications with the computed ETA and the requested style
    if reasons.len() < 2 {
        reasons.push(format!(
            "About {} min by car from where you are.",
            candidate.eta_minutes.round() as i64
        ));
    }
    if reasons.len() < 2 {
        reasons.push(match style {
            Style::Gem => "A quieter pick, away from the usual crowds.".to_string(),
            Style::Mainstream => "A well-loved classic that rarely disappoints.".to_string(),
        });
    }
    reasons
}

/// Split the ranked list into top pick and alternatives and shape the final
/// payload. Truncation and rounding happen in [`Suggestion::from_candidate`].
pub fn assemble(
    ranked: &[ScoredCandidate],
    expansion: &Expansion,
    query: &TripQuery,
    config: &ScoringConfig,
    pool_size: usize,
    eligible: usize,
) -> TripResponse {
    let debug = SuggestDebug {
        pool_size,
        eligible,
        mode: query.mode.to_string(),
        category: query.category.to_string(),
        style: query.style.to_string(),
        cap_multiplier: expansion.cap_multiplier,
    };

    let top = ranked.first().map(|candidate| {
        Suggestion::from_candidate(
            candidate,
            synthesize_why(candidate, query.style, expansion.widened),
        )
    });

    let alternatives: Vec<Suggestion> = ranked
        .iter()
        .skip(1)
        .take(config.max_alternatives)
        .map(|candidate| {
            Suggestion::from_candidate(
                candidate,
                synthesize_why(candidate, query.style, expansion.widened),
            )
        })
        .collect();

    let message = if top.is_none() {
        Some("No destination fits those filters right now. Try another category or a bigger time budget.".to_string())
    } else {
        None
    };

    TripResponse {
        ok: true,
        top,
        alternatives,
        note: expansion.widened.then(|| WIDENED_NOTE.to_string()),
        message,
        debug,
    }
}
