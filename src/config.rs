use std::time::Duration;

use charts::{ChartTheme, Palette, PaletteError};
use reqwest::Url;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API url \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request timeout must be at least one second")]
    ZeroTimeout,

    #[error("invalid palette: {0}")]
    Palette(#[from] PaletteError),
}

/// Everything the commands need to talk to the backends and draw charts.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: Url,
    pub timeout: Duration,
    pub theme: ChartTheme,
}

impl ClientConfig {
    pub fn new(api_url: &str, timeout_secs: u64, palette: Option<&str>) -> Result<Self, ConfigError> {
        let api_url = Url::parse(api_url).map_err(|e| ConfigError::InvalidUrl {
            url: api_url.to_string(),
            reason: e.to_string(),
        })?;
        if api_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl {
                url: api_url.to_string(),
                reason: "not a base url".to_string(),
            });
        }

        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let theme = match palette {
            Some(list) => ChartTheme::with_series_palette(Palette::parse(list)?),
            None => ChartTheme::default(),
        };

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            theme,
        })
    }

    /// Absolute url of a backend endpoint such as `/generate-chart`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}
