use crate::models::Coordinates;
use crate::services::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed destination taxonomy. Datasets serialize this as the `type` field;
/// unknown strings fold to `Other` rather than failing the record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlaceKind {
    City,
    Village,
    Sea,
    Mountain,
    Nature,
    Relax,
    Family,
    Winery,
    #[serde(other)]
    Other,
}

impl Default for PlaceKind {
    fn default() -> Self {
        PlaceKind::Other
    }
}

impl fmt::Display for PlaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlaceKind::City => "city",
            PlaceKind::Village => "village",
            PlaceKind::Sea => "sea",
            PlaceKind::Mountain => "mountain",
            PlaceKind::Nature => "nature",
            PlaceKind::Relax => "relax",
            PlaceKind::Family => "family",
            PlaceKind::Winery => "winery",
            PlaceKind::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// How broadly known a destination is. Doubles as a quality signal when the
/// dataset carries no explicit beauty score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Visibility {
    #[serde(rename = "well-known")]
    WellKnown,
    #[serde(rename = "hidden-gem")]
    HiddenGem,
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::WellKnown
    }
}

fn nan() -> f64 {
    f64::NAN
}

/// A destination record from the pre-built datasets. Read-only for the
/// lifetime of a request; computed fields live on
/// [`ScoredCandidate`](crate::models::suggestion::ScoredCandidate) instead.
///
/// Deserialization is deliberately lenient: missing coordinates become NaN
/// and missing id/name become empty strings, so one malformed record never
/// aborts a whole dataset. [`Place::is_valid`] is the structural check that
/// drops such records before any scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "nan")]
    pub lat: f64,
    #[serde(default = "nan")]
    pub lon: f64,
    #[serde(rename = "type", default)]
    pub kind: PlaceKind,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(rename = "beauty_score", skip_serializing_if = "Option::is_none")]
    pub beauty: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub why: Vec<String>,
}

impl Place {
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && self.lat.is_finite() && self.lon.is_finite()
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lon: self.lon,
        }
    }

    /// True if any tag normalizes to the given token.
    pub fn has_tag(&self, token: &str) -> bool {
        self.tags.iter().any(|t| normalize(t) == token)
    }
}

/// Canonical user-facing taste filter, shared by the normalizer, the
/// eligibility filter and the scorer. The source of truth for what a
/// free-text category resolves to is
/// [`canonical_category`](crate::services::normalize::canonical_category).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Wildcard: every place matches.
    Anywhere,
    City,
    Village,
    /// Combined category for free text naming both city and village roots.
    CityOrVillage,
    Sea,
    Mountain,
    Nature,
    Relax,
    Family,
    Winery,
}

impl Default for Category {
    fn default() -> Self {
        Category::Anywhere
    }
}

impl Category {
    /// A place matches if its kind equals the requested category or its tag
    /// set contains the canonical token. The combined category passes on
    /// either sub-category; the wildcard always passes.
    pub fn matches(&self, place: &Place) -> bool {
        let kind_or_tag =
            |kind: PlaceKind, token: &str| place.kind == kind || place.has_tag(token);
        match self {
            Category::Anywhere => true,
            Category::CityOrVillage => {
                Category::City.matches(place) || Category::Village.matches(place)
            }
            Category::City => kind_or_tag(PlaceKind::City, "city"),
            Category::Village => kind_or_tag(PlaceKind::Village, "village"),
            Category::Sea => kind_or_tag(PlaceKind::Sea, "sea"),
            Category::Mountain => kind_or_tag(PlaceKind::Mountain, "mountain"),
            Category::Nature => kind_or_tag(PlaceKind::Nature, "nature"),
            Category::Relax => kind_or_tag(PlaceKind::Relax, "relax"),
            Category::Family => kind_or_tag(PlaceKind::Family, "family"),
            Category::Winery => kind_or_tag(PlaceKind::Winery, "winery"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Anywhere => "anywhere",
            Category::City => "city",
            Category::Village => "village",
            Category::CityOrVillage => "city-or-village",
            Category::Sea => "sea",
            Category::Mountain => "mountain",
            Category::Nature => "nature",
            Category::Relax => "relax",
            Category::Family => "family",
            Category::Winery => "winery",
        };
        write!(f, "{}", s)
    }
}
