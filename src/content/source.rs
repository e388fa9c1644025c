//! Data sources - where the raw collections come from
//!
//! The repository only ever asks a source for whole collections, so a file
//! based source can be replaced by a database or a remote API without
//! touching the query code.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Article, Event, Photo, SiteConfig};
use crate::error::{ContentError, Result};

pub const ARTICLES_FILE: &str = "articles.json";
pub const PHOTOS_FILE: &str = "photos.json";
pub const EVENTS_FILE: &str = "events.json";
pub const SITE_CONFIG_FILE: &str = "site-config.json";

/// Provider of the four content collections
pub trait DataSource {
    fn load_articles(&self) -> Result<Vec<Article>>;
    fn load_photos(&self) -> Result<Vec<Photo>>;
    fn load_events(&self) -> Result<Vec<Event>>;
    fn load_site_config(&self) -> Result<SiteConfig>;
}

/// Reads JSON files from a data directory
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    data_dir: PathBuf,
}

impl JsonDirSource {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Read and parse one file, `None` if it does not exist
    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|source| ContentError::Io {
            path: path.clone(),
            source,
        })?;
        let value = serde_json::from_str(&content)
            .map_err(|source| ContentError::Parse { path, source })?;
        Ok(Some(value))
    }

    fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        match self.read(file)? {
            Some(items) => Ok(items),
            None => {
                tracing::debug!("No {} in {:?}, using an empty collection", file, self.data_dir);
                Ok(Vec::new())
            }
        }
    }
}

impl DataSource for JsonDirSource {
    fn load_articles(&self) -> Result<Vec<Article>> {
        self.read_collection(ARTICLES_FILE)
    }

    fn load_photos(&self) -> Result<Vec<Photo>> {
        self.read_collection(PHOTOS_FILE)
    }

    fn load_events(&self) -> Result<Vec<Event>> {
        self.read_collection(EVENTS_FILE)
    }

    fn load_site_config(&self) -> Result<SiteConfig> {
        match self.read(SITE_CONFIG_FILE)? {
            Some(config) => Ok(config),
            None => {
                tracing::warn!(
                    "No {} in {:?}, using the default site configuration",
                    SITE_CONFIG_FILE,
                    self.data_dir
                );
                Ok(SiteConfig::default())
            }
        }
    }
}

/// In-memory collections
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub articles: Vec<Article>,
    pub photos: Vec<Photo>,
    pub events: Vec<Event>,
    pub site_config: SiteConfig,
}

impl DataSource for StaticSource {
    fn load_articles(&self) -> Result<Vec<Article>> {
        Ok(self.articles.clone())
    }

    fn load_photos(&self) -> Result<Vec<Photo>> {
        Ok(self.photos.clone())
    }

    fn load_events(&self) -> Result<Vec<Event>> {
        Ok(self.events.clone())
    }

    fn load_site_config(&self) -> Result<SiteConfig> {
        Ok(self.site_config.clone())
    }
}
