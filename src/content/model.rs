//! Article, Photo and Event records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier
    pub id: String,

    /// URL-safe external key, unique across articles
    pub slug: String,

    pub title: String,

    /// Short summary shown on listing cards
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,

    /// Rich text body (trusted HTML)
    pub content: String,

    /// Path or URL of the cover image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    /// Publication date
    #[serde(with = "super::date")]
    pub published_at: DateTime<Utc>,

    /// Drafts carry `false` and never reach public listings
    pub published: bool,
}

/// A gallery image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,

    /// Path or URL of the image
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Gallery filter bucket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Name of the event the photo was taken at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
}

impl Photo {
    /// The category, if present and non-empty
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// A scheduled association activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(with = "super::date")]
    pub date: DateTime<Utc>,
    pub description: String,
    pub location: String,
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
