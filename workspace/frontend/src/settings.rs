use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::state::DayRange;

const STORAGE_PREFIX: &str = "georisk_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Prediction service host (e.g., "127.0.0.1" or "forecast.example.com")
    pub api_host: String,

    /// Prediction service port (e.g., 5000)
    pub api_port: u16,

    /// Path prefix in front of `/predict` and `/grsi` (empty by default)
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Timeout for `POST /predict` in milliseconds
    pub forecast_timeout_ms: u32,

    /// Timeout for `GET /grsi` in milliseconds
    pub risk_timeout_ms: u32,

    /// Accepted day-count range for forecasts
    pub days: DayRange,

    /// Day count preselected at session start
    pub default_days: u32,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "127.0.0.1".to_string(),
            api_port: 5000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            forecast_timeout_ms: 30_000,
            risk_timeout_ms: 20_000,
            days: DayRange::default(),
            default_days: 5,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                settings.apply_overrides(|name| {
                    storage
                        .get_item(&format!("{}{}", STORAGE_PREFIX, name))
                        .ok()
                        .flatten()
                });
            }
        }

        settings
    }

    /// Apply user overrides looked up by setting name (`api_host`,
    /// `api_port`, ...), from localStorage or the settings form.
    ///
    /// Values that fail to parse are ignored and the current value is kept.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name);

        if let Some(api_host) = get("api_host").filter(|host| !host.trim().is_empty()) {
            self.api_host = api_host.trim().to_string();
        }

        if let Some(port) = get("api_port").and_then(|v| v.trim().parse::<u16>().ok()) {
            self.api_port = port;
        }

        if let Some(api_path) = get("api_path") {
            self.api_path = normalize_path(&api_path);
        }

        if let Some(use_https) = get("api_use_https") {
            self.api_use_https = use_https.trim().eq_ignore_ascii_case("true");
        }

        if let Some(level) = get("log_level").and_then(|v| parse_level(&v)) {
            self.log_level = level;
        }

        if let Some(timeout) = get("forecast_timeout_ms").and_then(|v| parse_timeout(&v)) {
            self.forecast_timeout_ms = timeout;
        }

        if let Some(timeout) = get("risk_timeout_ms").and_then(|v| parse_timeout(&v)) {
            self.risk_timeout_ms = timeout;
        }
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                for (name, value) in self.storage_entries() {
                    storage.set_item(&format!("{}{}", STORAGE_PREFIX, name), &value)?;
                }
            }
        }
        Ok(())
    }

    pub fn storage_entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("api_host", self.api_host.clone()),
            ("api_port", self.api_port.to_string()),
            ("api_path", self.api_path.clone()),
            ("api_use_https", self.api_use_https.to_string()),
            ("log_level", self.log_level.as_str().to_lowercase()),
            ("forecast_timeout_ms", self.forecast_timeout_ms.to_string()),
            ("risk_timeout_ms", self.risk_timeout_ms.to_string()),
        ]
    }

    /// Get the base API URL (protocol + host + port + path)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

pub fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

/// Longest delay `setTimeout` accepts; larger values wrap and fire at once.
pub const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

fn parse_timeout(raw: &str) -> Option<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|ms| (1..=MAX_TIMEOUT_MS).contains(ms))
}

/// `"api/"` and `"/api"` both become `"/api"`; blank becomes empty.
pub fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn storage(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_base_url_points_at_local_service() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_base_url(), "http://127.0.0.1:5000");
        assert_eq!(settings.api_url("/predict"), "http://127.0.0.1:5000/predict");
    }

    #[test]
    fn test_apply_overrides() {
        let store = storage(&[
            ("api_host", "forecast.example.com"),
            ("api_port", "8443"),
            ("api_path", "api/v1/"),
            ("api_use_https", "TRUE"),
            ("log_level", "trace"),
            ("forecast_timeout_ms", "45000"),
        ]);

        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| store.get(key).cloned());

        assert_eq!(settings.api_base_url(), "https://forecast.example.com:8443/api/v1");
        assert_eq!(settings.log_level, Level::Trace);
        assert_eq!(settings.forecast_timeout_ms, 45000);
        assert_eq!(settings.risk_timeout_ms, 20_000);
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let store = storage(&[
            ("api_host", "  "),
            ("api_port", "not-a-port"),
            ("log_level", "verbose"),
            ("risk_timeout_ms", "0"),
        ]);

        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| store.get(key).cloned());

        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_storage_entries_round_trip_through_overrides() {
        let mut original = AppSettings::default();
        original.api_host = "10.0.0.2".to_string();
        original.api_use_https = true;
        original.log_level = Level::Warn;
        original.risk_timeout_ms = 5000;

        let store: HashMap<String, String> = original
            .storage_entries()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect();

        let mut restored = AppSettings::default();
        restored.apply_overrides(|key| store.get(key).cloned());
        assert_eq!(restored, original);
    }

    #[test]
    fn test_timeouts_beyond_timer_limit_are_ignored() {
        let store = storage(&[
            ("forecast_timeout_ms", "3000000000"),
            ("risk_timeout_ms", "2147483647"),
        ]);

        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| store.get(key).cloned());

        assert_eq!(settings.forecast_timeout_ms, 30_000);
        assert_eq!(settings.risk_timeout_ms, MAX_TIMEOUT_MS);
        assert!(i32::try_from(settings.risk_timeout_ms).is_ok());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path("api"), "/api");
        assert_eq!(normalize_path("/api/v1/"), "/api/v1");
    }
}
