use serde::Deserialize;

#[cfg(feature = "ssr")]
use crate::error::AppError;

/// Application settings, read server-side from `STELLENWERK_*` environment
/// variables and handed to the UI through context. The client falls back
/// to the defaults.
///
/// Everything has a default, so a bare `cargo leptos serve` works without
/// any configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Expose the guided demo entry points.
    pub demo_mode: bool,
    /// Artificial latency applied to mock directory calls, in ms.
    pub mock_latency_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            demo_mode: true,
            mock_latency_ms: 350,
        }
    }
}

#[cfg(feature = "ssr")]
impl Settings {
    /// Load settings from the environment (e.g. `STELLENWERK_DEMO_MODE`).
    pub fn from_env() -> Result<Self, AppError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("STELLENWERK").try_parsing(true))
            .build()
            .map_err(|e| AppError::Internal(format!("invalid configuration: {e}")))?
            .try_deserialize()
            .map_err(|e| AppError::Internal(format!("invalid configuration: {e}")))
    }
}
