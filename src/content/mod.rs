//! Content module - records, data sources and the query repository

pub mod clock;
pub mod date;
mod model;
mod repository;
mod site_config;
pub mod source;

pub use clock::{Clock, FixedClock, SystemClock};
pub use model::{Article, Event, Photo};
pub use repository::{ContentRepository, DEFAULT_RECENT_LIMIT};
pub use site_config::{
    Button, CallToAction, ContactInfo, Footer, Hero, Homepage, HowItWorks, NavLink, Navigation,
    NewsSection, SectionHeading, SiteConfig, SiteIdentity, Stat, Step,
};
pub use source::{DataSource, JsonDirSource, StaticSource};
