use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self, String> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lon
            ));
        }
        Ok(Coordinates { lat, lon })
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(42.35, 13.40).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err()); // Invalid lat
        assert!(Coordinates::new(0.0, 181.0).is_err()); // Invalid lon
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_distance_calculation() {
        let laquila = Coordinates::new(42.3498, 13.3995).unwrap();
        let rome = Coordinates::new(41.9028, 12.4964).unwrap();

        let distance = laquila.distance_to(&rome);
        // L'Aquila to Rome is approximately 89 km as the crow flies
        assert!((distance - 89.0).abs() < 5.0, "distance was {distance}");
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let a = Coordinates { lat: lat1, lon: lon1 };
            let b = Coordinates { lat: lat2, lon: lon2 };
            let ab = a.distance_to(&b);
            let ba = b.distance_to(&a);
            prop_assert!((ab - ba).abs() < 1e-9);
            prop_assert!(ab >= 0.0);
        }

        #[test]
        fn distance_to_self_is_zero(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let a = Coordinates { lat, lon };
            prop_assert!(a.distance_to(&a).abs() < 1e-9);
        }
    }
}
