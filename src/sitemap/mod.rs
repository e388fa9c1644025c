//! Sitemap generation (sitemap.xml)

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Settings;
use crate::content::ContentRepository;
use crate::helpers::{article_path, date_xml, full_url_for};

/// How often a page is expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// One `<url>` of the sitemap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Static pages with their change frequency and priority
const STATIC_ROUTES: [(&str, ChangeFrequency, f32); 5] = [
    ("/", ChangeFrequency::Weekly, 1.0),
    ("/about", ChangeFrequency::Monthly, 0.8),
    ("/contact", ChangeFrequency::Monthly, 0.8),
    ("/gallery", ChangeFrequency::Weekly, 0.7),
    ("/news", ChangeFrequency::Weekly, 0.9),
];

/// Static pages first, then one entry per published article
pub fn build(settings: &Settings, repo: &ContentRepository, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let pages = STATIC_ROUTES
        .iter()
        .map(|&(path, change_frequency, priority)| SitemapEntry {
            loc: full_url_for(settings, path).trim_end_matches('/').to_string(),
            last_modified: now,
            change_frequency,
            priority,
        });

    let articles = repo
        .published_articles()
        .into_iter()
        .map(|article| SitemapEntry {
            loc: full_url_for(settings, &article_path(&article.slug)),
            last_modified: article.published_at,
            change_frequency: ChangeFrequency::Monthly,
            priority: 0.6,
        });

    pages.chain(articles).collect()
}

/// Render entries as a sitemaps.org document
pub fn render(entries: &[SitemapEntry]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            date_xml(&entry.last_modified)
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
