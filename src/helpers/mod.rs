//! Helper functions for the presentation layer
//!
//! Date formatting, URL generation and asset lookup shared by the API
//! handlers and the sitemap.

mod assets;
mod date;
mod url;

pub use assets::*;
pub use date::*;
pub use url::*;
