use crate::constants::{MAX_SUGGESTION_TAGS, MAX_WHY_REASONS};
use crate::models::place::{Place, PlaceKind, Visibility};
use serde::Serialize;

/// A place plus the fields computed for one request. The wrapped [`Place`]
/// is never mutated; every pipeline stage maps candidates to candidates.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub place: Place,
    pub distance_km: f64,
    pub eta_minutes: f64,
    pub quality: f64,
    pub score: f64,
}

/// Round to three decimals for payload friendliness.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// One destination as shipped to the client. Numeric fields are rounded for
/// display and the arrays are truncated to bound payload size.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type")]
    pub kind: PlaceKind,
    pub tags: Vec<String>,
    pub visibility: Visibility,
    pub eta_min: i64,
    pub distance_km: i64,
    pub score: f64,
    pub why: Vec<String>,
}

impl Suggestion {
    pub fn from_candidate(candidate: &ScoredCandidate, why: Vec<String>) -> Self {
        let place = &candidate.place;
        let mut tags = place.tags.clone();
        tags.truncate(MAX_SUGGESTION_TAGS);
        let mut why = why;
        why.truncate(MAX_WHY_REASONS);

        Suggestion {
            id: place.id.clone(),
            name: place.name.clone(),
            lat: place.lat,
            lon: place.lon,
            kind: place.kind,
            tags,
            visibility: place.visibility,
            eta_min: candidate.eta_minutes.round() as i64,
            distance_km: candidate.distance_km.round() as i64,
            score: round3(candidate.score),
            why,
        }
    }
}

/// Diagnostic block echoed on every response. Not a stable contract.
#[derive(Debug, Serialize)]
pub struct SuggestDebug {
    pub pool_size: usize,
    pub eligible: usize,
    pub mode: String,
    pub category: String,
    pub style: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cap_multiplier: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub ok: bool,
    pub top: Option<Suggestion>,
    pub alternatives: Vec<Suggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub debug: SuggestDebug,
}
