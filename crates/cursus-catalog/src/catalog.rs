//! The course catalog.
//!
//! Courses are defined in source: a fixed list of under a dozen records.
//! Content is hosted externally (Notion) and only linked to.

use cursus_common::Course;

fn course(
    id: &str,
    title: &str,
    category: &str,
    notion_link: &str,
    badge: Option<&str>,
    color: &str,
    icon: &str,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: category.to_string(),
        notion_link: notion_link.to_string(),
        badge: badge.map(str::to_string),
        color: color.to_string(),
        icon: icon.to_string(),
    }
}

/// The full course list, in display order.
pub fn courses() -> Vec<Course> {
    vec![
        course(
            "management-strategique",
            "Management stratégique",
            "management",
            "https://curse-beast-a8d.notion.site/Cours-1b12e3d9501c80c28991ebf3e5459c25?pvs=4",
            None,
            "#3182ce",
            "📊",
        ),
        course(
            "methodologie-recherche",
            "Méthodologie de recherche",
            "research",
            "https://curse-beast-a8d.notion.site/M-thodologie-de-recherche-1912e3d9501c807485a0fc4e08e61d44?pvs=4",
            None,
            "#805ad5",
            "🔍",
        ),
        course(
            "gestion-budgetaire",
            "Gestion budgétaire et prévisionnelle",
            "finance",
            "https://curse-beast-a8d.notion.site/Cours-GBP-1ba2e3d9501c80079827f6eee15037ca?pvs=73",
            None,
            "#38a169",
            "💰",
        ),
        course(
            "strategie-financiere",
            "Stratégie financière",
            "finance",
            "https://curse-beast-a8d.notion.site/Cours-1a12e3d9501c80b1b2a7fde357872aab?pvs=4",
            Some("Popular"),
            "#38a169",
            "📈",
        ),
        course(
            "audit-comptable",
            "Audit comptable et financier",
            "finance",
            "https://curse-beast-a8d.notion.site/Cours-2-1d12e3d9501c80408fd5fc9c056643cb?pvs=4",
            None,
            "#38a169",
            "🧮",
        ),
        course(
            "anglais-affaires",
            "Anglais des affaires",
            "languages",
            "https://notion.so/anglais-affaires",
            None,
            "#d53f8c",
            "🇬🇧",
        ),
        course(
            "espagnole-affaires",
            "Espagnole des affaires",
            "languages",
            "https://notion.so/espagnole-affaires",
            None,
            "#d53f8c",
            "🇪🇸",
        ),
        course(
            "management-projet",
            "Management de projet",
            "management",
            "https://notion.so/management-projet",
            Some("New"),
            "#3182ce",
            "📋",
        ),
        course(
            "entrepreneuriat",
            "Entrepreneuriat",
            "business",
            "https://notion.so/entrepreneuriat",
            None,
            "#dd6b20",
            "🚀",
        ),
        course(
            "methodologie-communication",
            "Méthodologie de communication",
            "communication",
            "https://notion.so/methodologie-communication",
            None,
            "#e53e3e",
            "🗣️",
        ),
    ]
}

/// Distinct category names, in first-appearance order.
pub fn categories(courses: &[Course]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for course in courses {
        if !seen.contains(&course.category) {
            seen.push(course.category.clone());
        }
    }
    seen
}
