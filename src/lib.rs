//! asso-site: content layer for a community association website
//!
//! Articles, gallery photos, events and the site configuration are read
//! once from JSON files and served through read-only queries, a JSON API
//! and a sitemap.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod server;
pub mod sitemap;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentRepository, JsonDirSource};

/// A site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Application settings
    pub settings: config::Settings,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the JSON content files
    pub data_dir: PathBuf,
}

impl Site {
    /// Open a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let mut settings = if config_path.exists() {
            config::Settings::load(&config_path)?
        } else {
            config::Settings::default()
        };
        settings.apply_env();

        // Fail early on a bad timezone rather than at first render
        settings.tz()?;

        let data_dir = base_dir.join(&settings.data_dir);

        Ok(Self {
            settings,
            base_dir,
            data_dir,
        })
    }

    /// The data source backing this site
    pub fn source(&self) -> JsonDirSource {
        JsonDirSource::new(&self.data_dir)
    }

    /// Load all content
    pub fn repository(&self) -> Result<ContentRepository> {
        Ok(ContentRepository::load(&self.source())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_site_defaults() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.data_dir, dir.path().join("data"));
        assert!(site.repository().unwrap().articles().is_empty());
    }

    #[test]
    fn test_site_with_config() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "data_dir: content\n").unwrap();
        fs::create_dir(dir.path().join("content")).unwrap();
        fs::write(
            dir.path().join("content/photos.json"),
            r#"[{"id": "1", "url": "/1.jpg", "category": "Fêtes"}]"#,
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.repository().unwrap().categories(), ["Fêtes"]);
    }

    #[test]
    fn test_site_bad_timezone() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "timezone: Nowhere/Land\n").unwrap();
        assert!(Site::new(dir.path()).is_err());
    }
}
