//! Favorite repository.
//!
//! Holds the in-memory favorite set (loaded once from the store) and
//! writes the whole set back on every toggle. Ids are kept in insertion
//! order, matching the persisted array. No validation against the course
//! list happens here: a stale id from an older catalog simply never
//! matches anything and is carried along harmlessly.

use crate::error::Result;
use crate::store::FavoritesStore;
use std::sync::Mutex;

/// Repository for favorite operations.
#[derive(Debug)]
pub struct FavoriteRepository {
    store: FavoritesStore,
    favorites: Mutex<Vec<String>>,
}

impl FavoriteRepository {
    /// Create the repository, reading the persisted set once.
    pub fn new(store: FavoritesStore) -> Self {
        let favorites = store.load();
        Self {
            store,
            favorites: Mutex::new(favorites),
        }
    }

    /// The current favorite ids, in insertion order.
    pub fn list(&self) -> Vec<String> {
        self.favorites.lock().expect("favorites lock poisoned").clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.favorites
            .lock()
            .expect("favorites lock poisoned")
            .iter()
            .any(|f| f == id)
    }

    pub fn count(&self) -> usize {
        self.favorites.lock().expect("favorites lock poisoned").len()
    }

    /// Add the id when absent, remove it when present, then persist.
    /// Returns whether the id is a favorite after the call.
    pub fn toggle(&self, id: &str) -> Result<bool> {
        let mut favorites = self.favorites.lock().expect("favorites lock poisoned");
        let is_favorite = match favorites.iter().position(|f| f == id) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(id.to_string());
                true
            }
        };
        self.store.persist(&favorites)?;
        Ok(is_favorite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository(dir: &std::path::Path) -> FavoriteRepository {
        FavoriteRepository::new(FavoritesStore::open(dir).unwrap())
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let tmp = tempfile::tempdir().unwrap();
        let favorites = repository(tmp.path());

        assert!(favorites.toggle("entrepreneuriat").unwrap());
        assert!(favorites.contains("entrepreneuriat"));
        assert_eq!(favorites.count(), 1);

        assert!(!favorites.toggle("entrepreneuriat").unwrap());
        assert!(!favorites.contains("entrepreneuriat"));
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn test_double_toggle_restores_original_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let favorites = repository(tmp.path());
        favorites.toggle("gestion-budgetaire").unwrap();
        let before = favorites.list();

        favorites.toggle("entrepreneuriat").unwrap();
        favorites.toggle("entrepreneuriat").unwrap();
        assert_eq!(favorites.list(), before);
    }

    #[test]
    fn test_toggle_survives_reload() {
        let tmp = tempfile::tempdir().unwrap();
        repository(tmp.path()).toggle("entrepreneuriat").unwrap();

        // A fresh repository re-reads persisted storage.
        let reloaded = repository(tmp.path());
        assert_eq!(reloaded.list(), vec!["entrepreneuriat"]);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let tmp = tempfile::tempdir().unwrap();
        let favorites = repository(tmp.path());
        favorites.toggle("methodologie-recherche").unwrap();
        favorites.toggle("anglais-affaires").unwrap();
        favorites.toggle("entrepreneuriat").unwrap();
        favorites.toggle("anglais-affaires").unwrap();
        assert_eq!(
            favorites.list(),
            vec!["methodologie-recherche", "entrepreneuriat"]
        );
    }

    #[test]
    fn test_corrupted_storage_starts_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FavoritesStore::open(tmp.path()).unwrap();
        std::fs::write(store.path(), "[[[").unwrap();

        let favorites = FavoriteRepository::new(store);
        assert_eq!(favorites.count(), 0);
        // The next toggle overwrites the corrupt file with valid data.
        favorites.toggle("entrepreneuriat").unwrap();
        assert_eq!(repository(tmp.path()).list(), vec!["entrepreneuriat"]);
    }
}
