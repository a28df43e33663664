//! Catalog filtering.
//!
//! A course appears in the filtered result iff its title or description
//! case-insensitively contains the query AND the active category is "all"
//! or equals the course's category. The favorites view is a view over the
//! favorite set, not a predicate refinement: the query does not apply there.

use cursus_common::Course;

/// Active tab on the catalog page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogView {
    All,
    Category(String),
    Favorites,
}

impl CatalogView {
    /// Parse the `category` request parameter. `all` (or empty) and
    /// `favorites` are reserved names; anything else is a category tab.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | "all" => CatalogView::All,
            "favorites" => CatalogView::Favorites,
            other => CatalogView::Category(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CatalogView::All => "all",
            CatalogView::Category(name) => name,
            CatalogView::Favorites => "favorites",
        }
    }
}

/// The filter state of the catalog page.
#[derive(Debug, Clone)]
pub struct CourseFilter {
    pub query: String,
    pub view: CatalogView,
}

impl Default for CourseFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            view: CatalogView::All,
        }
    }
}

/// Apply the filter to the catalog, preserving catalog order.
pub fn filter_courses<'a>(
    courses: &'a [Course],
    filter: &CourseFilter,
    favorites: &[String],
) -> Vec<&'a Course> {
    if filter.view == CatalogView::Favorites {
        return courses
            .iter()
            .filter(|c| favorites.contains(&c.id))
            .collect();
    }

    let query = filter.query.to_lowercase();
    courses
        .iter()
        .filter(|c| matches_query(c, &query) && matches_category(c, &filter.view))
        .collect()
}

fn matches_query(course: &Course, query: &str) -> bool {
    query.is_empty()
        || course.title.to_lowercase().contains(query)
        || course.description.to_lowercase().contains(query)
}

fn matches_category(course: &Course, view: &CatalogView) -> bool {
    match view {
        CatalogView::All => true,
        CatalogView::Category(name) => &course.category == name,
        // Handled before the predicate scan.
        CatalogView::Favorites => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::courses;

    fn ids(result: &[&Course]) -> Vec<String> {
        result.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_full_catalog_in_order() {
        let all = courses();
        let result = filter_courses(&all, &CourseFilter::default(), &[]);
        assert_eq!(result.len(), all.len());
        assert_eq!(ids(&result), all.iter().map(|c| c.id.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn test_query_budget_matches_exactly_gestion_budgetaire() {
        let all = courses();
        let filter = CourseFilter {
            query: "budget".to_string(),
            view: CatalogView::All,
        };
        assert_eq!(ids(&filter_courses(&all, &filter, &[])), vec!["gestion-budgetaire"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let all = courses();
        let filter = CourseFilter {
            query: "BUDGET".to_string(),
            view: CatalogView::All,
        };
        assert_eq!(ids(&filter_courses(&all, &filter, &[])), vec!["gestion-budgetaire"]);
    }

    #[test]
    fn test_category_filter_is_exact_match() {
        let all = courses();
        let filter = CourseFilter {
            query: String::new(),
            view: CatalogView::Category("finance".to_string()),
        };
        assert_eq!(
            ids(&filter_courses(&all, &filter, &[])),
            vec!["gestion-budgetaire", "strategie-financiere", "audit-comptable"]
        );
    }

    #[test]
    fn test_query_and_category_combine() {
        let all = courses();
        let filter = CourseFilter {
            query: "management".to_string(),
            view: CatalogView::Category("management".to_string()),
        };
        assert_eq!(
            ids(&filter_courses(&all, &filter, &[])),
            vec!["management-strategique", "management-projet"]
        );
        // Same query under a non-matching category yields nothing.
        let filter = CourseFilter {
            query: "management".to_string(),
            view: CatalogView::Category("finance".to_string()),
        };
        assert!(filter_courses(&all, &filter, &[]).is_empty());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let all = courses();
        let filter = CourseFilter {
            query: String::new(),
            view: CatalogView::Category("astronomy".to_string()),
        };
        assert!(filter_courses(&all, &filter, &[]).is_empty());
    }

    #[test]
    fn test_favorites_view_ignores_query() {
        let all = courses();
        let favorites = vec!["entrepreneuriat".to_string(), "anglais-affaires".to_string()];
        let filter = CourseFilter {
            query: "budget".to_string(),
            view: CatalogView::Favorites,
        };
        // Catalog order, not favorite-insertion order.
        assert_eq!(
            ids(&filter_courses(&all, &filter, &favorites)),
            vec!["anglais-affaires", "entrepreneuriat"]
        );
    }

    #[test]
    fn test_favorites_view_with_empty_set_is_empty() {
        let all = courses();
        let filter = CourseFilter {
            query: String::new(),
            view: CatalogView::Favorites,
        };
        assert!(filter_courses(&all, &filter, &[]).is_empty());
    }

    #[test]
    fn test_dangling_favorite_id_never_matches() {
        let all = courses();
        let favorites = vec!["cours-supprime".to_string(), "entrepreneuriat".to_string()];
        let filter = CourseFilter {
            query: String::new(),
            view: CatalogView::Favorites,
        };
        assert_eq!(ids(&filter_courses(&all, &filter, &favorites)), vec!["entrepreneuriat"]);
    }

    #[test]
    fn test_view_parse_reserved_names() {
        assert_eq!(CatalogView::parse(""), CatalogView::All);
        assert_eq!(CatalogView::parse("all"), CatalogView::All);
        assert_eq!(CatalogView::parse("favorites"), CatalogView::Favorites);
        assert_eq!(
            CatalogView::parse("finance"),
            CatalogView::Category("finance".to_string())
        );
    }
}
