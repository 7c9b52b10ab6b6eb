use crate::models::Coordinates;
use crate::services::normalize::normalize;
use serde::{Deserialize, Serialize};

fn nan() -> f64 {
    f64::NAN
}

/// An airport, railway station or coach terminal from the per-mode hub
/// datasets. Lenient deserialization, same policy as [`Place`]: a malformed
/// record fails the structural check instead of failing the file.
///
/// [`Place`]: crate::models::place::Place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hub {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default = "nan")]
    pub lat: f64,
    #[serde(default = "nan")]
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Hub {
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.lat.is_finite() && self.lon.is_finite()
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lon: self.lon,
        }
    }

    /// Identity key for dedup: IATA-style code when present, else the
    /// normalized name. Keeps the same physical hub from appearing twice
    /// under name/code variants.
    pub fn identity_key(&self) -> String {
        match &self.code {
            Some(code) if !code.trim().is_empty() => code.trim().to_uppercase(),
            _ => normalize(&self.name),
        }
    }

    /// Short display label: code for flights boards, name otherwise.
    pub fn label(&self) -> &str {
        match &self.code {
            Some(code) if !code.trim().is_empty() => code,
            _ => &self.name,
        }
    }
}

/// Hub fields echoed to the client.
#[derive(Debug, Clone, Serialize)]
pub struct HubView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl From<&Hub> for HubView {
    fn from(hub: &Hub) -> Self {
        HubView {
            code: hub.code.clone(),
            name: hub.name.clone(),
            city: hub.city.clone(),
            lat: hub.lat,
            lon: hub.lon,
        }
    }
}

/// One hub-to-hub option as shipped to the client.
#[derive(Debug, Clone, Serialize)]
pub struct ItineraryOption {
    pub from: HubView,
    pub to: HubView,
    /// Human-readable leg summary, e.g. "FCO → CDG" or
    /// "Roma Termini → Lyon Part-Dieu".
    pub summary: String,
    pub eta_min: i64,
    pub distance_km: i64,
    pub score: f64,
}

/// Diagnostic block for the itinerary endpoint. Not a stable contract.
#[derive(Debug, Serialize)]
pub struct ItineraryDebug {
    pub pool_size: usize,
    pub reachable: usize,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_hub: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItineraryResponse {
    pub ok: bool,
    pub top: Option<ItineraryOption>,
    pub alternatives: Vec<ItineraryOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub debug: ItineraryDebug,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hub(code: Option<&str>, name: &str) -> Hub {
        Hub {
            code: code.map(|c| c.to_string()),
            name: name.to_string(),
            lat: 42.0,
            lon: 13.0,
            city: None,
        }
    }

    #[test]
    fn test_identity_key_prefers_code() {
        assert_eq!(hub(Some("fco"), "Fiumicino").identity_key(), "FCO");
        assert_eq!(hub(None, "  Roma Termini ").identity_key(), "roma termini");
        // Blank code falls back to the name
        assert_eq!(hub(Some("  "), "Pescara Centrale").identity_key(), "pescara centrale");
    }

    #[test]
    fn test_identity_key_merges_accent_variants() {
        assert_eq!(
            hub(None, "Gare de Lyon-Perrache").identity_key(),
            hub(None, "gare de lyon-perrache").identity_key()
        );
    }

    #[test]
    fn test_lenient_deserialization() {
        let hub: Hub = serde_json::from_str(r#"{"name": "Napoli Centrale"}"#).unwrap();
        assert!(!hub.is_valid());

        let hub: Hub =
            serde_json::from_str(r#"{"name": "Napoli Centrale", "lat": 40.85, "lon": 14.27}"#)
                .unwrap();
        assert!(hub.is_valid());
    }
}
