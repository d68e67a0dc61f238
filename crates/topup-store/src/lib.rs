//! Storage layer for the DS Store top-up backend.
//!
//! The relational schema has three tables:
//!
//! - `games`: static catalog rows, keyed by slug
//! - `game_items`: currency bundles, cascade-deleted with their game
//! - `transactions`: customer orders, keyed by the client-generated invoice ID
//!
//! [`PgStore`] is the production backend (PostgreSQL via `sqlx`, with
//! embedded migrations). [`MemStore`] implements the same [`Store`] trait in
//! memory for tests.
//!
//! # Example
//!
//! ```no_run
//! use topup_store::{seed_catalog, PgStore, Store};
//!
//! # async fn run() -> topup_store::Result<()> {
//! let store = PgStore::connect("postgres://localhost/topup").await?;
//! store.migrate().await?;
//! seed_catalog(&store).await?;
//!
//! let games = store.list_games().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod mem;
pub mod postgres;
pub mod seed;

pub use error::{Result, StoreError};
pub use mem::MemStore;
pub use postgres::PgStore;
pub use seed::{builtin_catalog, seed_catalog};

use async_trait::async_trait;

use topup_core::{Game, OrderStatus, Transaction};

/// The storage trait defining all database operations.
///
/// Abstracts the storage layer so handlers and tests can run against
/// different backends (`PostgreSQL` in production, in-memory in tests).
#[async_trait]
pub trait Store: Send + Sync {
    // =========================================================================
    // Catalog Operations
    // =========================================================================

    /// Insert a game together with its items.
    ///
    /// # Errors
    ///
    /// Returns an error if the game already exists or the database operation
    /// fails.
    async fn put_game(&self, game: &Game) -> Result<()>;

    /// Get a game (with items) by slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn get_game(&self, id: &str) -> Result<Option<Game>>;

    /// List all games with their items.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_games(&self) -> Result<Vec<Game>>;

    // =========================================================================
    // Transaction Operations
    // =========================================================================

    /// Insert a new order.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice ID already exists or the database
    /// operation fails.
    async fn insert_transaction(&self, transaction: &Transaction) -> Result<()>;

    /// Get an order by invoice ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn get_transaction(&self, id: &str) -> Result<Option<Transaction>>;

    /// List orders, newest first. `None` returns all rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    async fn list_transactions(&self, limit: Option<i64>) -> Result<Vec<Transaction>>;

    /// Set the status of an order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row has the given invoice ID.
    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<()>;

    /// Hard-delete an order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no row has the given invoice ID.
    async fn delete_transaction(&self, id: &str) -> Result<()>;
}
