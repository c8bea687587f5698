//! The favorites store.
//!
//! Data flows one way: a consumer calls [`FavoritesStore::toggle`] (or
//! `add`/`remove`), the store mutates its [`FavoritesState`], queues a
//! snapshot save, and publishes the new state to every [`Subscription`].
//!
//! - [`kind`] - workout/movement namespaces
//! - [`entity`] - stored entity shapes
//! - [`normalize`] - raw record validation and normalization
//! - [`set`] - the in-memory favorites set
//! - [`bus`] - change notification
//! - [`store`] - the mutation surface

pub mod bus;
pub mod entity;
pub mod kind;
pub mod normalize;
pub mod set;
pub mod store;

pub use bus::Subscription;
pub use entity::{Difficulty, FavoriteEntity, MovementFavorite, WorkoutFavorite};
pub use kind::FavoriteKind;
pub use normalize::normalize;
pub use set::FavoritesState;
pub use store::{FavoritesStore, LoadTicket, ToggleOutcome};
