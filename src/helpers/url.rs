//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::Settings;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&settings, "/news") // -> "/news"
/// ```
pub fn url_for(settings: &Settings, path: &str) -> String {
    let root = settings.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&settings, "/about") // -> "https://majosol.fr/about"
/// ```
pub fn full_url_for(settings: &Settings, path: &str) -> String {
    let base = settings.url.trim_end_matches('/');
    format!("{}{}", base, url_for(settings, path))
}

/// Path of an article page
pub fn article_path(slug: &str) -> String {
    format!("/news/{}", encode_segment(slug))
}

/// Percent-encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for() {
        let settings = Settings::default();
        assert_eq!(url_for(&settings, "/"), "/");
        assert_eq!(url_for(&settings, "news"), "/news");

        let settings = Settings {
            root: "/asso/".to_string(),
            ..Default::default()
        };
        assert_eq!(url_for(&settings, "/gallery"), "/asso/gallery");
        assert_eq!(url_for(&settings, ""), "/asso/");
    }

    #[test]
    fn test_full_url_for() {
        let settings = Settings {
            url: "https://example.org/".to_string(),
            ..Default::default()
        };
        assert_eq!(full_url_for(&settings, "/"), "https://example.org/");
        assert_eq!(
            full_url_for(&settings, "/news/forum-2024"),
            "https://example.org/news/forum-2024"
        );
    }

    #[test]
    fn test_article_path() {
        assert_eq!(article_path("forum-2024"), "/news/forum-2024");
        assert_eq!(article_path("a b/c"), "/news/a%20b%2Fc");
        assert_eq!(article_path("fête"), "/news/f%C3%AAte");
    }
}
