use charts::Palette;
use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const STORAGE_PREFIX: &str = "insightdash_";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend API host (e.g., "127.0.0.1" or "api.example.com")
    pub api_host: String,

    /// Backend API port (e.g., 8000)
    pub api_port: u16,

    /// API path prefix, empty when the endpoints live at the root
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Request timeout in milliseconds
    pub request_timeout_ms: u32,

    /// Comma-separated series colors overriding the default palette
    pub series_palette: Option<String>,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "127.0.0.1".to_string(),
            api_port: 8000,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            request_timeout_ms: 60000,
            series_palette: None,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Keys read from and written to localStorage, without the prefix.
    pub const STORED_KEYS: [&'static str; 7] = [
        "api_host",
        "api_port",
        "api_path",
        "api_use_https",
        "log_level",
        "request_timeout_ms",
        "series_palette",
    ];

    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            for key in Self::STORED_KEYS {
                if let Ok(Some(value)) = storage.get_item(&format!("{}{}", STORAGE_PREFIX, key)) {
                    settings.apply_stored(key, &value);
                }
            }
        }

        settings
    }

    /// Applies one stored value. Values that do not parse leave the current
    /// setting in place.
    pub fn apply_stored(&mut self, key: &str, value: &str) {
        match key {
            "api_host" if !value.trim().is_empty() => self.api_host = value.trim().to_string(),
            "api_port" => {
                if let Ok(port) = value.trim().parse::<u16>() {
                    self.api_port = port;
                }
            }
            "api_path" => self.api_path = value.trim().trim_end_matches('/').to_string(),
            "api_use_https" => self.api_use_https = value.trim().eq_ignore_ascii_case("true"),
            "log_level" => {
                if let Some(level) = parse_log_level(value) {
                    self.log_level = level;
                }
            }
            "request_timeout_ms" => {
                if let Ok(timeout) = value.trim().parse::<u32>() {
                    if timeout > 0 {
                        self.request_timeout_ms = timeout;
                    }
                }
            }
            "series_palette" => {
                self.series_palette = Some(value.trim().to_string()).filter(|p| !p.is_empty());
            }
            _ => log::trace!("Ignoring stored setting {}", key),
        }
    }

    /// Value written to localStorage for `key`.
    pub fn stored_value(&self, key: &str) -> Option<String> {
        match key {
            "api_host" => Some(self.api_host.clone()),
            "api_port" => Some(self.api_port.to_string()),
            "api_path" => Some(self.api_path.clone()),
            "api_use_https" => Some(self.api_use_https.to_string()),
            "log_level" => Some(self.log_level.as_str().to_lowercase()),
            "request_timeout_ms" => Some(self.request_timeout_ms.to_string()),
            "series_palette" => Some(self.series_palette.clone().unwrap_or_default()),
            _ => None,
        }
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                for key in Self::STORED_KEYS {
                    if let Some(value) = self.stored_value(key) {
                        storage.set_item(&format!("{}{}", STORAGE_PREFIX, key), &value)?;
                    }
                }
            }
        }
        Ok(())
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

    /// The custom series palette, if one is configured and valid.
    pub fn palette(&self) -> Option<Palette> {
        let list = self.series_palette.as_deref()?;
        match Palette::parse(list) {
            Ok(palette) => Some(palette),
            Err(err) => {
                log::warn!("Ignoring series palette \"{}\": {}", list, err);
                None
            }
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
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
