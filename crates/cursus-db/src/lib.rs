//! Cursus Storage Layer
//!
//! The favorites set is the only mutable state in the application. It is
//! persisted as a JSON-serialized array of course ids in a single file
//! under the data directory, read once on startup and overwritten on every
//! toggle.
//!
//! # Example
//!
//! ```rust,no_run
//! use cursus_db::{FavoriteRepository, FavoritesStore};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FavoritesStore::open("./data")?;
//!     let favorites = FavoriteRepository::new(store);
//!     favorites.toggle("entrepreneuriat")?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod favorites;
pub mod store;

pub use error::{DbError, Result};
pub use favorites::FavoriteRepository;
pub use store::{FavoritesStore, FAVORITES_FILE};
