//! Errors raised while loading content from a data source

use std::path::PathBuf;

/// Load-time failure of a data source
///
/// Queries over loaded content never fail; every variant here is raised
/// before a [`ContentRepository`](crate::content::ContentRepository) exists.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate article slug: {0}")]
    DuplicateSlug(String),

    /// Returned by [`parse_iso`](crate::content::date::parse_iso); while a
    /// collection loads, date errors surface inside [`ContentError::Parse`]
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, ContentError>;
