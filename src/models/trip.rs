use crate::models::{Category, Coordinates};
use crate::services::normalize::{canonical_category, canonical_style};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Car,
    Plane,
    Train,
    Bus,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelMode::Car => write!(f, "car"),
            TravelMode::Plane => write!(f, "plane"),
            TravelMode::Train => write!(f, "train"),
            TravelMode::Bus => write!(f, "bus"),
        }
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" | "drive" | "driving" | "auto" => Ok(TravelMode::Car),
            "plane" | "flight" | "fly" | "aereo" => Ok(TravelMode::Plane),
            "train" | "rail" | "treno" => Ok(TravelMode::Train),
            "bus" | "coach" | "pullman" => Ok(TravelMode::Bus),
            _ => Err(format!("Invalid travel mode: '{}'", s)),
        }
    }
}

/// The hub-to-hub subset of [`TravelMode`]. The itinerary pipeline only works
/// between airports, stations and terminals, so the car mode is rejected at
/// the type level instead of deep inside the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HubMode {
    Plane,
    Train,
    Bus,
}

impl TryFrom<TravelMode> for HubMode {
    type Error = String;

    fn try_from(mode: TravelMode) -> Result<Self, Self::Error> {
        match mode {
            TravelMode::Plane => Ok(HubMode::Plane),
            TravelMode::Train => Ok(HubMode::Train),
            TravelMode::Bus => Ok(HubMode::Bus),
            TravelMode::Car => Err("mode must be plane, train or bus".to_string()),
        }
    }
}

impl fmt::Display for HubMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubMode::Plane => write!(f, "plane"),
            HubMode::Train => write!(f, "train"),
            HubMode::Bus => write!(f, "bus"),
        }
    }
}

/// User taste axis between well-known and lesser-known destinations.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Mainstream,
    Gem,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Mainstream => write!(f, "mainstream"),
            Style::Gem => write!(f, "gem"),
        }
    }
}

fn nan() -> f64 {
    f64::NAN
}

/// Origin coordinates as they arrive on the wire. Fields default to NaN so a
/// partially-specified origin reaches `validate()` and produces a 400 with a
/// useful message instead of a framework-level rejection.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Origin {
    #[serde(default = "nan")]
    pub lat: f64,
    #[serde(default = "nan")]
    pub lon: f64,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub origin: Option<Origin>,
    pub time_budget_minutes: Option<f64>,
    #[serde(default)]
    pub mode: TravelMode,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub visited_ids: Vec<String>,
    #[serde(default)]
    pub week_ids: Vec<String>,
}

/// Canonical, validated form of a suggestion request. Everything downstream
/// of the HTTP handler works on this, never on the raw request.
#[derive(Debug, Clone)]
pub struct TripQuery {
    pub origin: Coordinates,
    pub budget_minutes: f64,
    pub mode: TravelMode,
    pub category: Category,
    pub style: Style,
    pub excluded: HashSet<String>,
}

impl TripRequest {
    /// Validate and canonicalize. Origin and time budget are hard
    /// requirements; category and style always resolve to a safe default.
    pub fn validate(&self) -> Result<TripQuery, String> {
        let origin = self
            .origin
            .ok_or_else(|| "origin is required".to_string())?;
        let origin = Coordinates::new(origin.lat, origin.lon)
            .map_err(|e| format!("invalid origin: {}", e))?;

        let budget = self
            .time_budget_minutes
            .ok_or_else(|| "timeBudgetMinutes is required".to_string())?;
        if !budget.is_finite() || budget <= 0.0 {
            return Err("timeBudgetMinutes must be a positive number".to_string());
        }

        let excluded: HashSet<String> = self
            .visited_ids
            .iter()
            .chain(self.week_ids.iter())
            .cloned()
            .collect();

        Ok(TripQuery {
            origin,
            budget_minutes: budget,
            mode: self.mode,
            category: canonical_category(self.category.as_deref()),
            style: canonical_style(self.style.as_deref()),
            excluded,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRequest {
    pub origin: Option<Origin>,
    pub time_budget_minutes: Option<f64>,
    pub mode: Option<TravelMode>,
}

/// Canonical, validated form of an itinerary request.
#[derive(Debug, Clone)]
pub struct ItineraryQuery {
    pub origin: Coordinates,
    pub budget_minutes: f64,
    pub mode: HubMode,
}

impl ItineraryRequest {
    pub fn validate(&self) -> Result<ItineraryQuery, String> {
        let origin = self
            .origin
            .ok_or_else(|| "origin is required".to_string())?;
        let origin = Coordinates::new(origin.lat, origin.lon)
            .map_err(|e| format!("invalid origin: {}", e))?;

        let budget = self
            .time_budget_minutes
            .ok_or_else(|| "timeBudgetMinutes is required".to_string())?;
        if !budget.is_finite() || budget <= 0.0 {
            return Err("timeBudgetMinutes must be a positive number".to_string());
        }

        let mode = self.mode.ok_or_else(|| "mode is required".to_string())?;

        Ok(ItineraryQuery {
            origin,
            budget_minutes: budget,
            mode: HubMode::try_from(mode)?,
        })
    }
}
