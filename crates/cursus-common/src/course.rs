/// Core catalog record.
/// A course is a flat immutable entry defined in source code: it is never
/// fetched, validated against a remote, or persisted. The linked content
/// lives on an external document host (Notion).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub notion_link: String,
    pub badge: Option<String>,
    pub color: String,
    pub icon: String,
}

/// External link for an arbitrary id segment.
/// The generic detail page links out without looking the id up in the
/// catalog, so any free-form id yields a well-formed URL.
pub fn notion_url_for(id: &str) -> String {
    format!("https://notion.so/{}", id)
}
