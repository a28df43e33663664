//! Shared application state for the web server.

use cursus_common::{Course, CursusError, Result};
use cursus_config::Config;
use cursus_db::{FavoriteRepository, FavoritesStore};
use std::sync::Arc;
use tracing::info;

/// Shared state injected into every Axum handler.
///
/// The catalog is immutable for the lifetime of the process; the favorites
/// repository serializes its file writes behind its own lock.
pub struct AppState {
    pub courses: Vec<Course>,
    pub categories: Vec<String>,
    pub favorites: FavoriteRepository,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let courses = cursus_catalog::courses();
        let categories = cursus_catalog::categories(&courses);

        let store = FavoritesStore::open(&config.storage.data_dir)
            .map_err(|err| CursusError::Storage(err.to_string()))?;
        let favorites = FavoriteRepository::new(store);
        info!(
            "Catalog loaded: {} courses, {} categories, {} favorites",
            courses.len(),
            categories.len(),
            favorites.count()
        );

        Ok(Self {
            courses,
            categories,
            favorites,
        })
    }
}

pub type SharedState = Arc<AppState>;
