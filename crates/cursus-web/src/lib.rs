//! cursus-web — Web UI for the Cursus course catalog
//! Serves:
//!   - The landing page: course grid with search, category tabs and favorites
//!   - A generic course detail page for any id segment
//!   - JSON endpoints backing the client-side filtering and favorite toggles

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
