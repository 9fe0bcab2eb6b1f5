//! Planner configuration.

/// Tunable parameters for journey planning and itinerary timing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Maximum walking distance from a rider's point to a route (meters).
    /// Routes farther than this are not candidates for boarding or alighting.
    pub proximity_threshold_m: f64,

    /// Maximum distance between two route coordinates for the routes to be
    /// considered meeting there (meters).
    pub transfer_tolerance_m: f64,

    /// Assumed average jeepney speed, used to estimate durations (km/h).
    pub assumed_speed_kmh: f64,
}

/// Error returned when a configuration value is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid planner config: {field} must be a positive finite number")]
pub struct InvalidConfig {
    field: &'static str,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(proximity_threshold_m: f64, transfer_tolerance_m: f64, assumed_speed_kmh: f64) -> Self {
        Self {
            proximity_threshold_m,
            transfer_tolerance_m,
            assumed_speed_kmh,
        }
    }

    /// Check every value is positive and finite.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        let fields = [
            ("proximity_threshold_m", self.proximity_threshold_m),
            ("transfer_tolerance_m", self.transfer_tolerance_m),
            ("assumed_speed_kmh", self.assumed_speed_kmh),
        ];

        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(InvalidConfig { field });
            }
        }

        Ok(())
    }

    /// Returns the assumed speed in meters per second.
    pub fn speed_mps(&self) -> f64 {
        self.assumed_speed_kmh / 3.6
    }

    /// Estimated riding time for a distance, in seconds.
    pub fn duration_for(&self, distance_m: f64) -> f64 {
        distance_m / self.speed_mps()
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            proximity_threshold_m: 500.0,
            transfer_tolerance_m: 50.0,
            assumed_speed_kmh: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.proximity_threshold_m, 500.0);
        assert_eq!(config.transfer_tolerance_m, 50.0);
        assert_eq!(config.assumed_speed_kmh, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(1000.0, 25.0, 20.0);

        assert_eq!(config.proximity_threshold_m, 1000.0);
        assert_eq!(config.transfer_tolerance_m, 25.0);
        assert_eq!(config.assumed_speed_kmh, 20.0);
    }

    #[test]
    fn speed_conversion() {
        let config = PlannerConfig::new(500.0, 50.0, 36.0);

        assert!((config.speed_mps() - 10.0).abs() < 1e-12);
        assert!((config.duration_for(1000.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_positive_values() {
        let err = PlannerConfig::new(0.0, 50.0, 50.0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid planner config: proximity_threshold_m must be a positive finite number"
        );

        assert!(PlannerConfig::new(500.0, -1.0, 50.0).validate().is_err());
        assert!(PlannerConfig::new(500.0, 50.0, 0.0).validate().is_err());
        assert!(PlannerConfig::new(500.0, 50.0, f64::NAN).validate().is_err());
        assert!(PlannerConfig::new(f64::INFINITY, 50.0, 50.0).validate().is_err());
    }
}
