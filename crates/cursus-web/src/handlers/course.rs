//! Course detail page.
//!
//! The route is generic over any free-form id segment: the id is only used
//! to build the page title and the external Notion link. No lookup against
//! the course list occurs, so the page renders for unknown ids too.

use axum::{extract::Path, response::Html};

use crate::handlers::html_escape;
use cursus_common::notion_url_for;

/// GET /course/{id}
pub async fn course_page(Path(id): Path<String>) -> Html<String> {
    let id = html_escape(&id);
    let notion_url = html_escape(&notion_url_for(&id));

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Course: {id} | Learning Platform</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
<div class="page">
    <div class="back-row">
        <a href="/" class="btn btn-ghost">
            <svg width="16" height="16" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M20 11H7.83l5.59-5.59L12 4l-8 8 8 8 1.41-1.41L7.83 13H20v-2z"/></svg>
            Retour aux cours
        </a>
    </div>

    <div class="detail-grid">
        <main class="detail-main">
            <div>
                <h1 class="detail-title">{id}</h1>
                <p class="text-muted">Description détaillée du cours sera affichée ici.</p>
            </div>

            <hr class="separator">

            <section class="detail-section">
                <h2>À propos de ce cours</h2>
                <p>
                    Contenu détaillé du cours. Cette section contiendrait une description complète du cours,
                    des objectifs d'apprentissage, et d'autres informations pertinentes.
                </p>
            </section>

            <hr class="separator">

            <section class="detail-section">
                <h2>Programme du cours</h2>
                <div class="module-list">
                    <div class="module-card">
                        <h3>Module 1: Introduction</h3>
                        <p class="text-muted">Aperçu des concepts fondamentaux et introduction au sujet.</p>
                    </div>
                    <div class="module-card">
                        <h3>Module 2: Concepts avancés</h3>
                        <p class="text-muted">Exploration des concepts avancés et applications pratiques.</p>
                    </div>
                    <div class="module-card">
                        <h3>Module 3: Études de cas</h3>
                        <p class="text-muted">Analyse d'études de cas réels et applications dans l'industrie.</p>
                    </div>
                </div>
            </section>
        </main>

        <aside class="detail-side">
            <div class="side-card">
                <h2>Informations du cours</h2>
                <p class="text-muted">Détails et ressources</p>
                <ul class="info-list">
                    <li>
                        <svg width="16" height="16" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M11.99 2C6.47 2 2 6.48 2 12s4.47 10 9.99 10C17.52 22 22 17.52 22 12S17.52 2 11.99 2zM12 20c-4.42 0-8-3.58-8-8s3.58-8 8-8 8 3.58 8 8-3.58 8-8 8zm.5-13H11v6l5.25 3.15.75-1.23-4.5-2.67z"/></svg>
                        10 heures de contenu
                    </li>
                    <li>
                        <svg width="16" height="16" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M19 3h-1V1h-2v2H8V1H6v2H5c-1.11 0-1.99.9-1.99 2L3 19c0 1.1.89 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm0 16H5V8h14v11z"/></svg>
                        Mis à jour le 15 avril 2025
                    </li>
                    <li>
                        <svg width="16" height="16" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M16 11c1.66 0 2.99-1.34 2.99-3S17.66 5 16 5c-1.66 0-3 1.34-3 3s1.34 3 3 3zm-8 0c1.66 0 2.99-1.34 2.99-3S9.66 5 8 5C6.34 5 5 6.34 5 8s1.34 3 3 3zm0 2c-2.33 0-7 1.17-7 3.5V19h14v-2.5c0-2.33-4.67-3.5-7-3.5zm8 0c-.29 0-.62.02-.97.05 1.16.84 1.97 1.97 1.97 3.45V19h6v-2.5c0-2.33-4.67-3.5-7-3.5z"/></svg>
                        45 étudiants inscrits
                    </li>
                </ul>
                <hr class="separator">
                <a class="btn btn-primary card-link" href="{notion_url}" target="_blank" rel="noopener">
                    <svg width="16" height="16" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg"><path d="M14 2H6c-1.1 0-1.99.9-1.99 2L4 20c0 1.1.89 2 1.99 2H18c1.1 0 2-.9 2-2V8l-6-6zm2 16H8v-2h8v2zm0-4H8v-2h8v2zm-3-5V3.5L18.5 9H13z"/></svg>
                    Ouvrir dans Notion
                </a>
            </div>

            <div class="side-card">
                <h2>Cours associés</h2>
                <a href="/course/related-course-1" class="related-link">
                    <div class="related-title">Cours associé 1</div>
                    <div class="text-muted">Description brève</div>
                </a>
                <a href="/course/related-course-2" class="related-link">
                    <div class="related-title">Cours associé 2</div>
                    <div class="text-muted">Description brève</div>
                </a>
                <a href="/course/related-course-3" class="related-link">
                    <div class="related-title">Cours associé 3</div>
                    <div class="text-muted">Description brève</div>
                </a>
            </div>
        </aside>
    </div>
</div>
</body>
</html>"#,
        id = id,
        notion_url = notion_url,
    ))
}
