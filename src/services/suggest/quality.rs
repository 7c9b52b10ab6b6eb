use crate::config::ScoringConfig;
use crate::models::{Place, ScoredCandidate, Style, Visibility};

/// Quality in [clamp_min, 1.0]: the dataset beauty score when present,
/// otherwise a default that trusts hidden-gem curation more than silence.
pub fn quality_score(place: &Place, config: &ScoringConfig) -> f64 {
    match place.beauty {
        Some(beauty) => beauty.clamp(config.quality_clamp_min, 1.0),
        None => match place.visibility {
            Visibility::HiddenGem => config.quality_default_hidden_gem,
            Visibility::WellKnown => config.quality_default_well_known,
        },
    }
}

/// Fill in quality and drop candidates under the gate threshold.
///
/// The gate only binds for the gem style: "hidden gem" is a claim of curated
/// quality, so it filters strictly, while mainstream tolerates plainer but
/// broadly-known destinations.
pub fn apply_gate(
    candidates: Vec<ScoredCandidate>,
    style: Style,
    config: &ScoringConfig,
) -> Vec<ScoredCandidate> {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let quality = quality_score(&candidate.place, config);
            if style == Style::Gem && quality < config.quality_gate_threshold {
                return None;
            }
            Some(ScoredCandidate {
                quality,
                ..candidate
            })
        })
        .collect()
}
