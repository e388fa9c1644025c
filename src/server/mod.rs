//! Read-only JSON API over the content repository

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::content::{Article, ContentRepository, Event, Photo, SiteConfig};
use crate::helpers::{article_path, event_image, long_date_fr, Icon};
use crate::sitemap;
use crate::Site;

/// Shared handler state
struct AppState {
    repo: ContentRepository,
    settings: Settings,
    tz: Tz,
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let repo = site.repository()?;
    let app = router(repo, site.settings.clone())?;

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the API router
pub fn router(repo: ContentRepository, settings: Settings) -> Result<Router> {
    let tz = settings.tz()?;
    let state = Arc::new(AppState { repo, settings, tz });

    Ok(Router::new()
        .route("/api/site", get(site_handler))
        .route("/api/home", get(home_handler))
        .route("/api/articles", get(articles_handler))
        .route("/api/articles/recent", get(recent_articles_handler))
        .route("/api/articles/:slug", get(article_handler))
        .route("/api/photos", get(photos_handler))
        .route("/api/categories", get(categories_handler))
        .route("/api/events", get(events_handler))
        .route("/api/events/upcoming", get(upcoming_events_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

#[derive(Debug, Deserialize)]
struct LimitQuery {
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct CategoryQuery {
    category: Option<String>,
}

/// An article as shown on listing cards and detail pages
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ArticleView {
    #[serde(flatten)]
    article: Article,
    path: String,
    date_label: String,
}

impl ArticleView {
    fn new(article: Article, tz: &Tz) -> Self {
        Self {
            path: article_path(&article.slug),
            date_label: long_date_fr(&article.published_at, tz),
            article,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventView {
    #[serde(flatten)]
    event: Event,
    image: String,
    date_label: String,
}

impl EventView {
    fn new(event: Event, settings: &Settings, tz: &Tz) -> Self {
        Self {
            image: event_image(settings, &event.name).to_string(),
            date_label: long_date_fr(&event.date, tz),
            event,
        }
    }
}

#[derive(Debug, Serialize)]
struct StepView {
    icon: Icon,
    title: String,
    description: String,
}

/// Everything the homepage needs in one document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HomeView {
    site: SiteConfig,
    steps: Vec<StepView>,
    recent_articles: Vec<ArticleView>,
    upcoming_events: Vec<EventView>,
}

fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

async fn site_handler(State(state): State<Arc<AppState>>) -> Json<SiteConfig> {
    Json(state.repo.site_config())
}

async fn home_handler(State(state): State<Arc<AppState>>) -> Json<HomeView> {
    let site = state.repo.site_config();

    let steps = site
        .homepage
        .how_it_works
        .steps
        .iter()
        .map(|step| StepView {
            icon: Icon::from_name(&step.icon),
            title: step.title.clone(),
            description: step.description.clone(),
        })
        .collect();

    let recent_articles = state
        .repo
        .recent_articles(state.settings.home_recent_articles)
        .into_iter()
        .map(|a| ArticleView::new(a, &state.tz))
        .collect();

    let upcoming_events = state
        .repo
        .upcoming_events()
        .into_iter()
        .take(state.settings.home_upcoming_events)
        .map(|e| EventView::new(e, &state.settings, &state.tz))
        .collect();

    Json(HomeView {
        site,
        steps,
        recent_articles,
        upcoming_events,
    })
}

async fn articles_handler(State(state): State<Arc<AppState>>) -> Json<Vec<ArticleView>> {
    Json(
        state
            .repo
            .published_articles()
            .into_iter()
            .map(|a| ArticleView::new(a, &state.tz))
            .collect(),
    )
}

async fn recent_articles_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<ArticleView>> {
    let limit = query.limit.unwrap_or(state.settings.home_recent_articles);
    Json(
        state
            .repo
            .recent_articles(limit)
            .into_iter()
            .map(|a| ArticleView::new(a, &state.tz))
            .collect(),
    )
}

async fn article_handler(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Response {
    match state.repo.published_article_by_slug(&slug) {
        Some(article) => Json(ArticleView::new(article, &state.tz)).into_response(),
        None => {
            tracing::debug!("No published article for slug {:?}", slug);
            not_found(format!("Article not found: {}", slug))
        }
    }
}

async fn photos_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Json<Vec<Photo>> {
    Json(match query.category {
        Some(category) => state.repo.photos_by_category(&category),
        None => state.repo.photos(),
    })
}

async fn categories_handler(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.repo.categories())
}

async fn events_handler(State(state): State<Arc<AppState>>) -> Json<Vec<EventView>> {
    Json(
        state
            .repo
            .events()
            .into_iter()
            .map(|e| EventView::new(e, &state.settings, &state.tz))
            .collect(),
    )
}

async fn upcoming_events_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<EventView>> {
    Json(
        state
            .repo
            .upcoming_events()
            .into_iter()
            .take(query.limit.unwrap_or(usize::MAX))
            .map(|e| EventView::new(e, &state.settings, &state.tz))
            .collect(),
    )
}

async fn sitemap_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let entries = sitemap::build(&state.settings, &state.repo, state.repo.now());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::render(&entries),
    )
}
