//! Lookup of presentation assets by content-provided names
//!
//! Content refers to icons and event pictures by free-form strings. Both
//! lookups go through a finite registry and fall back to a default entry
//! when the name is unknown.

use serde::Serialize;

use crate::config::Settings;

/// Icons available to homepage steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    HandHeart,
    Heart,
    Users,
    Clock,
    Calendar,
    Handshake,
    Home,
    Mail,
    MapPin,
    Phone,
    Star,
}

impl Icon {
    const ALL: [Icon; 11] = [
        Icon::HandHeart,
        Icon::Heart,
        Icon::Users,
        Icon::Clock,
        Icon::Calendar,
        Icon::Handshake,
        Icon::Home,
        Icon::Mail,
        Icon::MapPin,
        Icon::Phone,
        Icon::Star,
    ];

    /// Icon used when a name does not resolve
    pub const FALLBACK: Icon = Icon::HandHeart;

    /// Registry name, as written in site-config.json
    pub fn name(self) -> &'static str {
        match self {
            Icon::HandHeart => "HandHeart",
            Icon::Heart => "Heart",
            Icon::Users => "Users",
            Icon::Clock => "Clock",
            Icon::Calendar => "Calendar",
            Icon::Handshake => "Handshake",
            Icon::Home => "Home",
            Icon::Mail => "Mail",
            Icon::MapPin => "MapPin",
            Icon::Phone => "Phone",
            Icon::Star => "Star",
        }
    }

    /// Resolve a registry name, falling back to [`Icon::FALLBACK`]
    pub fn from_name(name: &str) -> Icon {
        Self::ALL
            .into_iter()
            .find(|icon| icon.name() == name)
            .unwrap_or_else(|| {
                tracing::debug!("Unknown icon {:?}, using {}", name, Self::FALLBACK.name());
                Self::FALLBACK
            })
    }
}

/// Picture shown for an event on the homepage
pub fn event_image<'a>(settings: &'a Settings, event_name: &str) -> &'a str {
    settings
        .event_images
        .get(event_name)
        .map(String::as_str)
        .unwrap_or(&settings.default_event_image)
}
