//! cursus-catalog — The course list and the filtering logic behind the
//! catalog page: text search, category tabs and the favorites view.

pub mod catalog;
pub mod filter;

pub use catalog::{categories, courses};
pub use filter::{filter_courses, CatalogView, CourseFilter};
