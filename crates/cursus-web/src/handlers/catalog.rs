//! Catalog handlers — the landing page and the filtered course API.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::handlers::html_escape;
use crate::state::SharedState;
use cursus_catalog::{filter_courses, CatalogView, CourseFilter};
use cursus_common::Course;

#[derive(Debug, Deserialize, Default)]
pub struct CatalogQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

// === API Types ===

#[derive(Debug, Serialize)]
pub struct ApiCourse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub notion_link: String,
    pub badge: Option<String>,
    pub color: String,
    pub icon: String,
    pub is_favorite: bool,
}

impl ApiCourse {
    fn from_course(course: &Course, is_favorite: bool) -> Self {
        Self {
            id: course.id.clone(),
            title: course.title.clone(),
            description: course.description.clone(),
            category: course.category.clone(),
            notion_link: course.notion_link.clone(),
            badge: course.badge.clone(),
            color: course.color.clone(),
            icon: course.icon.clone(),
            is_favorite,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CoursesResponse {
    pub query: String,
    pub category: String,
    pub total: usize,
    pub courses: Vec<ApiCourse>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

// === API Endpoints ===

/// GET /api/courses - The filtered catalog.
/// `category` accepts a category name, `all` (default) or `favorites`.
pub async fn api_courses(
    State(state): State<SharedState>,
    Query(params): Query<CatalogQuery>,
) -> Json<CoursesResponse> {
    let filter = CourseFilter {
        query: params.q.unwrap_or_default(),
        view: CatalogView::parse(params.category.as_deref().unwrap_or("all")),
    };
    let favorites = state.favorites.list();
    let courses: Vec<ApiCourse> = filter_courses(&state.courses, &filter, &favorites)
        .into_iter()
        .map(|course| ApiCourse::from_course(course, favorites.contains(&course.id)))
        .collect();

    Json(CoursesResponse {
        query: filter.query,
        category: filter.view.as_str().to_string(),
        total: courses.len(),
        courses,
    })
}

/// GET /api/categories - Category names in catalog order.
pub async fn api_categories(State(state): State<SharedState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.categories.clone(),
    })
}

// === Landing Page ===

/// GET / - Course grid with search box, category tabs and favorites.
pub async fn catalog_page(State(state): State<SharedState>) -> Html<String> {
    let favorites = state.favorites.list();
    let cards: String = state
        .courses
        .iter()
        .map(|course| render_card(course, favorites.contains(&course.id)))
        .collect();
    let tabs = render_tabs(&state.categories, favorites.is_empty());

    Html(render_catalog(&tabs, &cards))
}

fn render_tabs(categories: &[String], favorites_empty: bool) -> String {
    let category_tabs: String = categories
        .iter()
        .map(|category| {
            format!(
                r#"<button class="tab capitalize" data-category="{0}">{0}</button>"#,
                html_escape(category)
            )
        })
        .collect();
    let favorites_hidden = if favorites_empty { " hidden" } else { "" };
    format!(
        r#"<button class="tab active" data-category="all">Tous</button>
            {}
            <button class="tab{}" id="favorites-tab" data-category="favorites">Favoris</button>"#,
        category_tabs, favorites_hidden
    )
}

fn render_card(course: &Course, is_favorite: bool) -> String {
    let badge_html = match course.badge.as_deref() {
        Some("New") => r#"<span class="badge badge-new">New</span>"#.to_string(),
        Some(badge) => format!(r#"<span class="badge badge-popular">{}</span>"#, html_escape(badge)),
        None => String::new(),
    };
    let star_class = if is_favorite { "star-btn favorited" } else { "star-btn" };

    format!(
        r#"
        <div class="course-card" style="border-top-color: {color};">
            <button class="{star_class}" data-id="{id}" aria-label="Ajouter aux favoris">
                <svg width="20" height="20" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z"/></svg>
            </button>
            <div class="card-header">
                <div class="course-icon" style="background-color: {color}20;">{icon}</div>
                <h2 class="course-title">{title}</h2>
            </div>
            {badge}
            <p class="course-description">{description}</p>
            <div class="card-meta">
                <span class="badge badge-outline capitalize">{category}</span>
            </div>
            <a class="btn btn-primary card-link" href="{link}" target="_blank" rel="noopener">
                <svg width="16" height="16" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M14 2H6c-1.1 0-1.99.9-1.99 2L4 20c0 1.1.89 2 1.99 2H18c1.1 0 2-.9 2-2V8l-6-6zm2 16H8v-2h8v2zm0-4H8v-2h8v2zm-3-5V3.5L18.5 9H13z"/></svg>
                Accéder au cours
            </a>
        </div>"#,
        color = html_escape(&course.color),
        star_class = star_class,
        id = html_escape(&course.id),
        icon = course.icon,
        title = html_escape(&course.title),
        badge = badge_html,
        description = html_escape(&course.description),
        category = html_escape(&course.category),
        link = html_escape(&course.notion_link),
    )
}

fn render_catalog(tabs: &str, cards: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>S8 (Gestion Financière et Comptable) — Cursus</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="page">
    <header class="catalog-header">
        <div class="brand">
            <div class="brand-icon">
                <svg width="36" height="36" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg" fill="currentColor"><path d="M12 3L1 9l11 6 9-4.91V17h2V9M5 13.18v4L12 21l7-3.82v-4L12 17l-7-3.82z"/></svg>
            </div>
            <h1 class="brand-title">S8 (Gestion Financière et Comptable)</h1>
        </div>
        <p class="subtitle">Accédez à tous vos cours et ressources pédagogiques en un seul endroit</p>
        <div class="search-box">
            <svg class="search-icon" width="16" height="16" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z"/></svg>
            <input id="course-search" type="search" placeholder="Rechercher un cours..." autocomplete="off">
            <button id="clear-search" class="clear-btn hidden" aria-label="Effacer la recherche">
                <svg width="16" height="16" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/></svg>
            </button>
        </div>
    </header>

    <nav class="tabs" id="category-tabs">
            {tabs}
    </nav>

    <div id="course-grid" class="course-grid">{cards}
    </div>

    <div id="empty-state" class="empty-state hidden">
        <div class="empty-icon">
            <svg width="24" height="24" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z"/></svg>
        </div>
        <h3>Aucun cours trouvé</h3>
        <p>Essayez de modifier vos critères de recherche</p>
        <button id="reset-filters" class="btn btn-outline">Réinitialiser les filtres</button>
    </div>
</div>
<canvas id="particle-canvas"></canvas>
<script src="/static/js/catalog.js"></script>
</body>
</html>"#,
        tabs = tabs,
        cards = cards,
    )
}
