use crate::sdk::geocoding::Coord;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_COUNTRY: &str = "IL";
pub const DEFAULT_USER_AGENT: &str = "IsraelAirDistanceCalculator/1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Country filter must be a 2-letter code, got {0:?}")]
    InvalidCountry(String),

    #[error("GEOCODER_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),

    #[error("User agent must not be empty")]
    EmptyUserAgent,
}

/// Settings for the outbound lookup service.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderConfig {
    pub base_url: String,
    /// ISO 3166-1 alpha-2, passed as `countrycodes`.
    pub country: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GeocoderConfig {
    /// Reads `GEOCODER_*` variables, falling back to the defaults for any that are unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("GEOCODER_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(country) = lookup("GEOCODER_COUNTRY") {
            config = config.with_country(&country)?;
        }
        if let Some(agent) = lookup("GEOCODER_USER_AGENT") {
            config = config.with_user_agent(&agent)?;
        }
        if let Some(raw) = lookup("GEOCODER_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_country(mut self, country: &str) -> Result<Self, ConfigError> {
        let code = country.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidCountry(country.to_string()));
        }
        self.country = code.to_ascii_uppercase();
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, ConfigError> {
        let agent = user_agent.trim();
        if agent.is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        self.user_agent = agent.to_string();
        Ok(self)
    }
}

/// Initial map view and the padding used when fitting a drawn route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapDefaults {
    pub center: Coord,
    pub zoom: u8,
    pub fit_padding_px: u32,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            // Approximate center of Israel
            center: Coord::new_unchecked(31.5, 34.75),
            zoom: 8,
            fit_padding_px: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = GeocoderConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GeocoderConfig::default());
        assert_eq!(config.country, "IL");
        assert_eq!(config.timeout, Duration::from_secs(15));
    }

    #[test]
    fn overrides_are_applied() {
        let config = GeocoderConfig::from_lookup(lookup_from(&[
            ("GEOCODER_BASE_URL", "http://localhost:8080/"),
            ("GEOCODER_COUNTRY", "fr"),
            ("GEOCODER_USER_AGENT", "test-agent/0.1"),
            ("GEOCODER_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.country, "FR");
        assert_eq!(config.user_agent, "test-agent/0.1");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_bad_country_codes() {
        for bad in ["", "ISR", "1L", "I"] {
            let err = GeocoderConfig::default().with_country(bad).unwrap_err();
            assert_eq!(err, ConfigError::InvalidCountry(bad.to_string()));
        }
    }

    #[test]
    fn rejects_zero_and_garbage_timeouts() {
        for bad in ["0", "-1", "soon"] {
            let err =
                GeocoderConfig::from_lookup(lookup_from(&[("GEOCODER_TIMEOUT_SECS", bad)]))
                    .unwrap_err();
            assert_eq!(err, ConfigError::InvalidTimeout(bad.to_string()));
        }
    }

    #[test]
    fn rejects_blank_user_agent() {
        let err = GeocoderConfig::default().with_user_agent("  ").unwrap_err();
        assert_eq!(err, ConfigError::EmptyUserAgent);
    }
}
