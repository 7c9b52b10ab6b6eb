use crate::constants::*;
use std::env;
use std::path::PathBuf;

/// Tunable numeric policy for the suggestion pipeline. Every threshold the
/// scorer, quality gate and radius expander use lives here, so tests can
/// override them independently of production values. Defaults reflect
/// tuning, not derivation.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Minimum distance (km) a destination must be from the origin.
    /// Anything closer is where the user already is, not a trip.
    pub min_trip_distance_km: f64,

    /// Lower clamp applied to a dataset beauty score.
    pub quality_clamp_min: f64,

    /// Quality assumed for hidden-gem places with no beauty score.
    pub quality_default_hidden_gem: f64,

    /// Quality assumed for well-known places with no beauty score.
    pub quality_default_well_known: f64,

    /// Minimum quality to survive the gate. Only enforced for the gem style;
    /// mainstream tolerates broadly-known but plainer destinations.
    pub quality_gate_threshold: f64,

    /// Ascending time-cap multipliers tried against the budget.
    pub radius_multipliers: Vec<f64>,

    /// Candidate count a cap must reach before the ladder stops.
    pub min_candidates: usize,

    /// How many closest-by-time candidates the fallback keeps when no cap
    /// reaches `min_candidates`.
    pub fallback_count: usize,

    /// Budget multiplier beyond which the response owns up to widening the
    /// search.
    pub honesty_threshold: f64,

    /// Minimum half-width (minutes) of the time-fit tolerance band.
    pub time_fit_floor_minutes: f64,

    /// Half-width of the time-fit band as a fraction of the budget.
    /// Longer trips tolerate proportionally larger deviations.
    pub time_fit_width_factor: f64,

    /// Weight of time-fit in the composite score.
    pub time_weight: f64,

    /// Weight of quality in the composite score.
    pub quality_weight: f64,

    /// ETA/budget ratio below which the trip feels like a non-trip.
    pub out_of_band_low: f64,

    /// ETA/budget ratio above which the trip breaks the time promise.
    pub out_of_band_high: f64,

    /// Flat penalty for candidates outside the acceptable ETA/budget band.
    /// A step, not a slope: an out-of-band trip is a broken promise, not a
    /// slightly worse one.
    pub out_of_band_penalty: f64,

    /// Flat penalty for well-known cities when the user asked for gems.
    pub gem_city_penalty: f64,

    /// Weight of geographic proximity in the hub-pair score (the remainder
    /// goes to time-fit).
    pub hub_proximity_weight: f64,

    /// Maximum number of alternatives returned alongside the top pick.
    pub max_alternatives: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            min_trip_distance_km: 2.0,
            quality_clamp_min: 0.2,
            quality_default_hidden_gem: 0.75,
            quality_default_well_known: 0.60,
            quality_gate_threshold: 0.70,
            radius_multipliers: vec![1.05, 1.18, 1.35, 1.60],
            min_candidates: 10,
            fallback_count: 10,
            honesty_threshold: 1.25,
            time_fit_floor_minutes: 20.0,
            time_fit_width_factor: 0.5,
            time_weight: 0.5,
            quality_weight: 0.5,
            out_of_band_low: 0.55,
            out_of_band_high: 1.55,
            out_of_band_penalty: 0.25,
            gem_city_penalty: 0.15,
            hub_proximity_weight: 0.35,
            max_alternatives: 2,
        }
    }
}

impl ScoringConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let radius_multipliers = match env::var("SUGGEST_RADIUS_MULTIPLIERS") {
            Ok(raw) => {
                let parsed: Result<Vec<f64>, _> =
                    raw.split(',').map(|s| s.trim().parse::<f64>()).collect();
                let parsed = parsed.map_err(|_| "Invalid SUGGEST_RADIUS_MULTIPLIERS")?;
                if parsed.is_empty() {
                    return Err("SUGGEST_RADIUS_MULTIPLIERS must not be empty".to_string());
                }
                parsed
            }
            Err(_) => defaults.radius_multipliers.clone(),
        };

        Ok(Self {
            min_trip_distance_km: env::var("SUGGEST_MIN_TRIP_DISTANCE_KM")
                .unwrap_or_else(|_| defaults.min_trip_distance_km.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_MIN_TRIP_DISTANCE_KM")?,

            quality_clamp_min: env::var("SUGGEST_QUALITY_CLAMP_MIN")
                .unwrap_or_else(|_| defaults.quality_clamp_min.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_QUALITY_CLAMP_MIN")?,

            quality_default_hidden_gem: env::var("SUGGEST_QUALITY_DEFAULT_HIDDEN_GEM")
                .unwrap_or_else(|_| defaults.quality_default_hidden_gem.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_QUALITY_DEFAULT_HIDDEN_GEM")?,

            quality_default_well_known: env::var("SUGGEST_QUALITY_DEFAULT_WELL_KNOWN")
                .unwrap_or_else(|_| defaults.quality_default_well_known.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_QUALITY_DEFAULT_WELL_KNOWN")?,

            quality_gate_threshold: env::var("SUGGEST_QUALITY_GATE_THRESHOLD")
                .unwrap_or_else(|_| defaults.quality_gate_threshold.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_QUALITY_GATE_THRESHOLD")?,

            radius_multipliers,

            min_candidates: env::var("SUGGEST_MIN_CANDIDATES")
                .unwrap_or_else(|_| defaults.min_candidates.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_MIN_CANDIDATES")?,

            fallback_count: env::var("SUGGEST_FALLBACK_COUNT")
                .unwrap_or_else(|_| defaults.fallback_count.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_FALLBACK_COUNT")?,

            honesty_threshold: env::var("SUGGEST_HONESTY_THRESHOLD")
                .unwrap_or_else(|_| defaults.honesty_threshold.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_HONESTY_THRESHOLD")?,

            time_fit_floor_minutes: env::var("SUGGEST_TIME_FIT_FLOOR_MINUTES")
                .unwrap_or_else(|_| defaults.time_fit_floor_minutes.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_TIME_FIT_FLOOR_MINUTES")?,

            time_fit_width_factor: env::var("SUGGEST_TIME_FIT_WIDTH_FACTOR")
                .unwrap_or_else(|_| defaults.time_fit_width_factor.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_TIME_FIT_WIDTH_FACTOR")?,

            time_weight: env::var("SUGGEST_TIME_WEIGHT")
                .unwrap_or_else(|_| defaults.time_weight.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_TIME_WEIGHT")?,

            quality_weight: env::var("SUGGEST_QUALITY_WEIGHT")
                .unwrap_or_else(|_| defaults.quality_weight.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_QUALITY_WEIGHT")?,

            out_of_band_low: env::var("SUGGEST_OUT_OF_BAND_LOW")
                .unwrap_or_else(|_| defaults.out_of_band_low.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_OUT_OF_BAND_LOW")?,

            out_of_band_high: env::var("SUGGEST_OUT_OF_BAND_HIGH")
                .unwrap_or_else(|_| defaults.out_of_band_high.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_OUT_OF_BAND_HIGH")?,

            out_of_band_penalty: env::var("SUGGEST_OUT_OF_BAND_PENALTY")
                .unwrap_or_else(|_| defaults.out_of_band_penalty.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_OUT_OF_BAND_PENALTY")?,

            gem_city_penalty: env::var("SUGGEST_GEM_CITY_PENALTY")
                .unwrap_or_else(|_| defaults.gem_city_penalty.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_GEM_CITY_PENALTY")?,

            hub_proximity_weight: env::var("SUGGEST_HUB_PROXIMITY_WEIGHT")
                .unwrap_or_else(|_| defaults.hub_proximity_weight.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_HUB_PROXIMITY_WEIGHT")?,

            max_alternatives: env::var("SUGGEST_MAX_ALTERNATIVES")
                .unwrap_or_else(|_| defaults.max_alternatives.to_string())
                .parse()
                .map_err(|_| "Invalid SUGGEST_MAX_ALTERNATIVES")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub dataset_cache_ttl: u64,
    pub scoring: ScoringConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            data_dir: PathBuf::from(
                env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
            ),
            dataset_cache_ttl: env::var("DATASET_CACHE_TTL")
                .unwrap_or_else(|_| DEFAULT_DATASET_CACHE_TTL_SECONDS.to_string())
                .parse()
                .map_err(|_| "Invalid DATASET_CACHE_TTL")?,
            scoring: ScoringConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
