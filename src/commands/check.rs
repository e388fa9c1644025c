//! Validate the content files

use anyhow::{Context, Result};

use crate::content::ContentRepository;
use crate::Site;

/// Counts reported after a successful load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub articles: usize,
    pub published: usize,
    pub photos: usize,
    pub categories: usize,
    pub events: usize,
    pub upcoming: usize,
}

impl Report {
    pub fn new(repo: &ContentRepository) -> Self {
        Self {
            articles: repo.articles().len(),
            published: repo.published_articles().len(),
            photos: repo.photos().len(),
            categories: repo.categories().len(),
            events: repo.events().len(),
            upcoming: repo.upcoming_events().len(),
        }
    }
}

/// Load every collection and report what was found
pub fn run(site: &Site) -> Result<Report> {
    let repo = site
        .repository()
        .with_context(|| format!("Invalid content in {:?}", site.data_dir))?;
    let report = Report::new(&repo);

    println!(
        "Articles: {} ({} published)",
        report.articles, report.published
    );
    println!(
        "Photos: {} in {} categories",
        report.photos, report.categories
    );
    println!("Events: {} ({} upcoming)", report.events, report.upcoming);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_reports_counts() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::write(
            data.join("articles.json"),
            r#"[
                {"id": "1", "slug": "a", "title": "A", "excerpt": "", "content": "",
                 "publishedAt": "2024-01-01", "published": true},
                {"id": "2", "slug": "b", "title": "B", "content": "",
                 "publishedAt": "2024-02-01", "published": false}
            ]"#,
        )
        .unwrap();
        fs::write(
            data.join("events.json"),
            r#"[{"id": "e1", "name": "Forum", "date": "2099-09-06",
                 "description": "", "location": "Meyzieu"}]"#,
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let report = run(&site).unwrap();
        assert_eq!(report.articles, 2);
        assert_eq!(report.published, 1);
        assert_eq!(report.photos, 0);
        assert_eq!(report.upcoming, 1);
    }

    #[test]
    fn test_check_rejects_duplicate_slugs() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::write(
            data.join("articles.json"),
            r#"[
                {"id": "1", "slug": "a", "title": "A", "content": "",
                 "publishedAt": "2024-01-01", "published": true},
                {"id": "2", "slug": "a", "title": "A bis", "content": "",
                 "publishedAt": "2024-02-01", "published": true}
            ]"#,
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        let err = run(&site).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate article slug: a"));
    }
}
