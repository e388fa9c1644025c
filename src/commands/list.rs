//! List site content

use anyhow::Result;

use crate::content::{ContentRepository, DEFAULT_RECENT_LIMIT};
use crate::helpers::format_date;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let repo = site.repository()?;
    for line in render(&repo, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// Lines printed for a content type
pub fn render(repo: &ContentRepository, content_type: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    match content_type {
        "article" | "articles" => {
            let articles = repo.articles();
            lines.push(format!("Articles ({}):", articles.len()));
            for article in articles {
                lines.push(format!(
                    "  {} - {} [{}]{}",
                    format_date(&article.published_at, "YYYY-MM-DD"),
                    article.title,
                    article.slug,
                    if article.published { "" } else { " (draft)" }
                ));
            }
        }
        "recent" => {
            let articles = repo.recent_articles(DEFAULT_RECENT_LIMIT);
            lines.push(format!("Recent articles ({}):", articles.len()));
            for article in articles {
                lines.push(format!(
                    "  {} - {} [{}]",
                    format_date(&article.published_at, "YYYY-MM-DD"),
                    article.title,
                    article.slug
                ));
            }
        }
        "photo" | "photos" => {
            let photos = repo.photos();
            lines.push(format!("Photos ({}):", photos.len()));
            for photo in photos {
                lines.push(format!(
                    "  {} {} [{}]",
                    photo.id,
                    photo.url,
                    photo.category().unwrap_or("-")
                ));
            }
        }
        "category" | "categories" => {
            let categories = repo.categories();
            lines.push(format!("Categories ({}):", categories.len()));
            for category in categories {
                let count = repo.photos_by_category(&category).len();
                lines.push(format!("  {} ({})", category, count));
            }
        }
        "event" | "events" => {
            let events = repo.events();
            lines.push(format!("Events ({}):", events.len()));
            for event in events {
                lines.push(format!(
                    "  {} - {} @ {}",
                    format_date(&event.date, "YYYY-MM-DD"),
                    event.name,
                    event.location
                ));
            }
        }
        "upcoming" => {
            let events = repo.upcoming_events();
            lines.push(format!("Upcoming events ({}):", events.len()));
            for event in events {
                lines.push(format!(
                    "  {} - {} @ {}",
                    format_date(&event.date, "YYYY-MM-DD"),
                    event.name,
                    event.location
                ));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: articles, recent, photos, categories, events, upcoming",
                content_type
            );
        }
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Article, Photo, StaticSource};
    use chrono::{TimeZone, Utc};

    fn repo() -> ContentRepository {
        let source = StaticSource {
            articles: vec![Article {
                id: "1".to_string(),
                slug: "forum".to_string(),
                title: "Forum".to_string(),
                excerpt: String::new(),
                content: String::new(),
                cover_image: None,
                published_at: Utc.with_ymd_and_hms(2024, 9, 7, 0, 0, 0).unwrap(),
                published: false,
            }],
            photos: vec![
                Photo {
                    id: "p1".to_string(),
                    url: "/p1.jpg".to_string(),
                    title: None,
                    description: None,
                    category: Some("Fêtes".to_string()),
                    event_name: None,
                },
                Photo {
                    id: "p2".to_string(),
                    url: "/p2.jpg".to_string(),
                    title: None,
                    description: None,
                    category: None,
                    event_name: None,
                },
            ],
            ..Default::default()
        };
        ContentRepository::load(&source).unwrap()
    }

    #[test]
    fn test_list_articles() {
        let lines = render(&repo(), "articles").unwrap();
        assert_eq!(lines[0], "Articles (1):");
        assert_eq!(lines[1], "  2024-09-07 - Forum [forum] (draft)");
        assert_eq!(render(&repo(), "recent").unwrap(), ["Recent articles (0):"]);
    }

    #[test]
    fn test_list_photos_and_categories() {
        let lines = render(&repo(), "photos").unwrap();
        assert_eq!(lines[2], "  p2 /p2.jpg [-]");

        let lines = render(&repo(), "categories").unwrap();
        assert_eq!(lines, ["Categories (1):", "  Fêtes (1)"]);
    }

    #[test]
    fn test_unknown_type() {
        assert!(render(&repo(), "videos").is_err());
    }
}
