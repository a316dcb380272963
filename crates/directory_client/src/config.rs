use std::{
    fs,
    path::Path,
    str::FromStr,
    time::Duration,
};

use serde::{Deserialize, Serialize};
use shared::geo::Coordinates;
use tracing::warn;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "directory.toml";

/// Environment prefixes, applied in order; later ones win.
const ENV_PREFIXES: [&str; 2] = ["DIRECTORY_", "APP__"];

/// Every key understood in the config file and, upper-cased and prefixed,
/// in the environment.
pub const SETTING_KEYS: &[&str] = &[
    "base_url",
    "api_version",
    "timeout_ms",
    "retry_count",
    "map_center_lat",
    "map_center_lng",
    "map_zoom",
    "map_tile_layer",
    "map_attribution",
    "app_name",
    "app_version",
    "contact_email",
    "enable_debug",
    "enable_analytics",
    "theme_mode",
    "primary_color",
    "secondary_color",
    "cache_duration_ms",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub version: String,
    pub timeout_ms: u64,
    pub retry_count: u32,
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            version: "v1".into(),
            timeout_ms: 10_000,
            retry_count: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: u8,
    pub tile_layer: String,
    pub attribution: String,
}

impl MapSettings {
    pub fn default_center(&self) -> Coordinates {
        Coordinates {
            lat: self.default_center_lat,
            lng: self.default_center_lng,
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_center_lat: 13.7563,
            default_center_lng: 100.5018,
            default_zoom: 12,
            tile_layer: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: "&copy; OpenStreetMap contributors".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub contact_email: String,
    pub enable_debug: bool,
    pub enable_analytics: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "Healthtech Directory".into(),
            version: "1.0.0".into(),
            contact_email: "support@healthtech.com".into(),
            enable_debug: false,
            enable_analytics: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub mode: String,
    pub primary_color: String,
    pub secondary_color: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            mode: "light".into(),
            primary_color: "#1976d2".into(),
            secondary_color: "#9c27b0".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheSettings {
    pub duration_ms: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            duration_ms: 300_000,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub api: ApiSettings,
    pub map: MapSettings,
    pub app: AppSettings,
    pub theme: ThemeSettings,
    pub cache: CacheSettings,
}

impl Settings {
    /// Applies one flat setting. Returns false for unknown keys and for values
    /// that do not parse; the previous value is kept in both cases.
    pub fn apply(&mut self, key: &str, raw: &str) -> bool {
        let raw = raw.trim();
        match key {
            "base_url" => set_text(&mut self.api.base_url, raw),
            "api_version" => set_text(&mut self.api.version, raw),
            "timeout_ms" => set_parsed(&mut self.api.timeout_ms, raw),
            "retry_count" => set_parsed(&mut self.api.retry_count, raw),
            "map_center_lat" => set_parsed(&mut self.map.default_center_lat, raw),
            "map_center_lng" => set_parsed(&mut self.map.default_center_lng, raw),
            "map_zoom" => set_parsed(&mut self.map.default_zoom, raw),
            "map_tile_layer" => set_text(&mut self.map.tile_layer, raw),
            "map_attribution" => set_text(&mut self.map.attribution, raw),
            "app_name" => set_text(&mut self.app.name, raw),
            "app_version" => set_text(&mut self.app.version, raw),
            "contact_email" => set_text(&mut self.app.contact_email, raw),
            "enable_debug" => set_flag(&mut self.app.enable_debug, raw),
            "enable_analytics" => set_flag(&mut self.app.enable_analytics, raw),
            "theme_mode" => set_text(&mut self.theme.mode, raw),
            "primary_color" => set_text(&mut self.theme.primary_color, raw),
            "secondary_color" => set_text(&mut self.theme.secondary_color, raw),
            "cache_duration_ms" => set_parsed(&mut self.cache.duration_ms, raw),
            _ => false,
        }
    }

    /// Applies a flat TOML document (`key = value` pairs, scalars only).
    pub fn apply_toml(&mut self, raw: &str) -> Result<(), toml::de::Error> {
        let table: toml::Table = toml::from_str(raw)?;
        for (key, value) in &table {
            let text = match value {
                toml::Value::String(text) => text.clone(),
                toml::Value::Integer(number) => number.to_string(),
                toml::Value::Float(number) => number.to_string(),
                toml::Value::Boolean(flag) => flag.to_string(),
                _ => {
                    warn!(%key, "config: ignoring non-scalar setting");
                    continue;
                }
            };
            if !self.apply(key, &text) {
                warn!(%key, value = %text, "config: ignoring unknown or invalid setting");
            }
        }
        Ok(())
    }

    /// Default `tracing` filter for front ends.
    pub fn log_filter(&self) -> &'static str {
        if self.app.enable_debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn set_text(slot: &mut String, raw: &str) -> bool {
    if raw.is_empty() {
        return false;
    }
    *slot = raw.to_string();
    true
}

fn set_parsed<T: FromStr>(slot: &mut T, raw: &str) -> bool {
    match raw.parse::<T>() {
        Ok(parsed) => {
            *slot = parsed;
            true
        }
        Err(_) => false,
    }
}

fn set_flag(slot: &mut bool, raw: &str) -> bool {
    set_parsed(slot, &raw.to_ascii_lowercase())
}

/// Defaults, then the config file, then the process environment.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_settings_with(config_path, |key| std::env::var(key).ok())
}

/// Like [`load_settings`] with an explicit environment lookup.
///
/// An explicit `config_path` must exist and parse. Without one,
/// [`DEFAULT_CONFIG_FILE`] is read from the working directory if present and
/// a broken file is only logged.
pub fn load_settings_with(
    config_path: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    match config_path {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            settings
                .apply_toml(&raw)
                .map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                if let Err(error) = settings.apply_toml(&raw) {
                    warn!(
                        path = DEFAULT_CONFIG_FILE,
                        %error,
                        "config: ignoring unparseable config file"
                    );
                }
            }
        }
    }

    for prefix in ENV_PREFIXES {
        for key in SETTING_KEYS {
            let var = format!("{prefix}{}", key.to_ascii_uppercase());
            if let Some(value) = env(&var) {
                if !settings.apply(key, &value) {
                    warn!(%var, "config: ignoring invalid environment value");
                }
            }
        }
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
