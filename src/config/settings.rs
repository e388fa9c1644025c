//! Application settings (_config.yml)

use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Environment variable overriding [`Settings::url`]
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // URL
    pub url: String,
    pub root: String,

    // Content
    pub data_dir: String,
    pub timezone: String,

    // Homepage
    pub home_recent_articles: usize,
    pub home_upcoming_events: usize,

    // Event images, keyed by event name
    #[serde(default)]
    pub event_images: HashMap<String, String>,
    pub default_event_image: String,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: "https://majosol.fr".to_string(),
            root: "/".to_string(),

            data_dir: "data".to_string(),
            timezone: "Europe/Paris".to_string(),

            home_recent_articles: 4,
            home_upcoming_events: 3,

            event_images: HashMap::new(),
            default_event_image: "/images/gallery/photo-10-ans.jpg".to_string(),

            server: ServerConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Apply overrides from the environment
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(SITE_URL_ENV) {
            if !url.is_empty() {
                tracing::debug!("Site URL overridden by {}: {}", SITE_URL_ENV, url);
                self.url = url;
            }
        }
    }

    /// The configured display timezone
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| anyhow!("Invalid timezone {:?}: {}", self.timezone, e))
    }
}

/// Development server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.data_dir, "data");
        assert_eq!(settings.home_recent_articles, 4);
        assert_eq!(settings.home_upcoming_events, 3);
        assert_eq!(settings.tz().unwrap(), chrono_tz::Europe::Paris);
    }

    #[test]
    fn test_parse_settings() {
        let yaml = r#"
url: https://example.org
data_dir: content
timezone: America/Montreal
event_images:
  Fête des Lumières: /images/articles/fete_des_lumieres_1.jpg
server:
  port: 8080
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.url, "https://example.org");
        assert_eq!(settings.data_dir, "content");
        assert_eq!(settings.tz().unwrap(), chrono_tz::America::Montreal);
        assert_eq!(
            settings.event_images["Fête des Lumières"],
            "/images/articles/fete_des_lumieres_1.jpg"
        );
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.ip, "localhost");
        assert_eq!(settings.home_recent_articles, 4);
    }

    #[test]
    fn test_invalid_timezone() {
        let settings = Settings {
            timezone: "Mars/Olympus".to_string(),
            ..Default::default()
        };
        assert!(settings.tz().is_err());
    }
}
