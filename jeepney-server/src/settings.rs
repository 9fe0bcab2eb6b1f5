//! Server settings read from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use crate::catalog::CatalogSource;
use crate::planner::PlannerConfig;

/// Error reading settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct Settings {
    /// `JEEPNEY_ROUTES`: file path or URL of the route document
    pub routes_source: CatalogSource,

    /// `JEEPNEY_ADDR`: listen address
    pub addr: SocketAddr,

    /// `JEEPNEY_RELOAD_SECS`: periodic catalog reload, off when unset
    pub reload_interval: Option<Duration>,

    /// `JEEPNEY_STATIC_DIR`: directory served under `/static`
    pub static_dir: Option<String>,

    /// `JEEPNEY_PROXIMITY_M`, `JEEPNEY_TRANSFER_M`, `JEEPNEY_SPEED_KMH`
    pub planner: PlannerConfig,
}

impl Settings {
    /// Read settings from process environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let routes_source = get("JEEPNEY_ROUTES")
            .map(|s| CatalogSource::parse(&s))
            .ok_or(SettingsError::Missing("JEEPNEY_ROUTES"))?;

        let addr = match get("JEEPNEY_ADDR") {
            Some(value) => value.trim().parse::<SocketAddr>().map_err(|_| SettingsError::Invalid {
                var: "JEEPNEY_ADDR",
                value,
                reason: "expected host:port",
            })?,
            None => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let reload_interval = match get("JEEPNEY_RELOAD_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(SettingsError::Invalid {
                        var: "JEEPNEY_RELOAD_SECS",
                        value,
                        reason: "expected a positive number of seconds",
                    });
                }
            },
            None => None,
        };

        let defaults = PlannerConfig::default();
        let planner = PlannerConfig::new(
            positive(&get, "JEEPNEY_PROXIMITY_M", defaults.proximity_threshold_m)?,
            positive(&get, "JEEPNEY_TRANSFER_M", defaults.transfer_tolerance_m)?,
            positive(&get, "JEEPNEY_SPEED_KMH", defaults.assumed_speed_kmh)?,
        );

        Ok(Self {
            routes_source,
            addr,
            reload_interval,
            static_dir: get("JEEPNEY_STATIC_DIR"),
            planner,
        })
    }
}

/// A finite, positive number, or `default` when unset.
fn positive(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: f64,
) -> Result<f64, SettingsError> {
    let Some(value) = get(var) else {
        return Ok(default);
    };

    match value.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(SettingsError::Invalid {
            var,
            value,
            reason: "expected a positive number",
        }),
    }
}
