//! Favorites API.
//!
//! Favorites persist on every toggle; the toggle response tells the client
//! whether the course was added, so the decorative particle burst only
//! fires on adds.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub id: String,
    pub favorite: bool,
    pub favorites: Vec<String>,
}

/// GET /api/favorites - The current favorite ids, in insertion order.
pub async fn api_favorites(State(state): State<SharedState>) -> Json<FavoritesResponse> {
    let favorites = state.favorites.list();
    let count = favorites.len();
    Json(FavoritesResponse { favorites, count })
}

/// POST /api/favorites/{id}/toggle - Toggle one id and persist the set.
pub async fn toggle_favorite(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let favorite = state.favorites.toggle(&id)?;
    Ok(Json(ToggleResponse {
        id,
        favorite,
        favorites: state.favorites.list(),
    }))
}
