//! `PostgreSQL` storage implementation.
//!
//! This module provides the `PgStore` implementation of the [`Store`] trait
//! on top of `sqlx`, with embedded migrations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::types::Json;
use sqlx::FromRow;

use topup_core::{Game, GameItem, InputField, OrderStatus, Transaction};

use crate::error::{Result, StoreError};
use crate::Store;

/// Maximum connections in the pool.
const MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL-backed storage implementation.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to the database at the given URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run pending schema migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails to apply.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

/// Raw `games` row.
#[derive(FromRow)]
struct GameRow {
    id: String,
    name: String,
    publisher: Option<String>,
    image: Option<String>,
    inputs: Option<Json<Vec<InputField>>>,
}

impl GameRow {
    fn into_game(self, items: Vec<GameItem>) -> Game {
        Game {
            id: self.id,
            name: self.name,
            publisher: self.publisher,
            image: self.image,
            inputs: self.inputs.map(|Json(inputs)| inputs).unwrap_or_default(),
            items,
        }
    }
}

/// Raw `game_items` row.
#[derive(FromRow)]
struct ItemRow {
    id: String,
    game_id: String,
    name: String,
    price: i64,
}

impl From<ItemRow> for GameItem {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.id,
            game_id: row.game_id,
            name: row.name,
            price: row.price,
        }
    }
}

/// Raw `transactions` row.
#[derive(FromRow)]
struct TransactionRow {
    id: String,
    phone: String,
    game_name: String,
    item_name: String,
    price: i64,
    unique_code: i64,
    final_price: i64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TransactionRow> for Transaction {
    type Error = StoreError;

    fn try_from(row: TransactionRow) -> Result<Self> {
        Ok(Self {
            id: row
                .id
                .parse()
                .map_err(|e| StoreError::Serialization(format!("invoice id: {e}")))?,
            phone: row.phone,
            game_name: row.game_name,
            item_name: row.item_name,
            price: row.price,
            unique_code: row.unique_code,
            final_price: row.final_price,
            status: row
                .status
                .parse()
                .map_err(|e| StoreError::Serialization(format!("status: {e}")))?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl Store for PgStore {
    // =========================================================================
    // Catalog Operations
    // =========================================================================

    async fn put_game(&self, game: &Game) -> Result<()> {
        sqlx::query("INSERT INTO games (id, name, publisher, image, inputs) VALUES ($1, $2, $3, $4, $5)")
            .bind(&game.id)
            .bind(&game.name)
            .bind(&game.publisher)
            .bind(&game.image)
            .bind(Json(&game.inputs))
            .execute(&self.pool)
            .await?;

        for item in &game.items {
            sqlx::query("INSERT INTO game_items (id, game_id, name, price) VALUES ($1, $2, $3, $4)")
                .bind(&item.id)
                .bind(&game.id)
                .bind(&item.name)
                .bind(item.price)
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }

    async fn get_game(&self, id: &str) -> Result<Option<Game>> {
        let row = sqlx::query_as::<_, GameRow>(
            "SELECT id, name, publisher, image, inputs FROM games WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, ItemRow>(
            "SELECT id, game_id, name, price FROM game_items WHERE game_id = $1 ORDER BY price",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(GameItem::from)
        .collect();

        Ok(Some(row.into_game(items)))
    }

    async fn list_games(&self) -> Result<Vec<Game>> {
        let games = sqlx::query_as::<_, GameRow>(
            "SELECT id, name, publisher, image, inputs FROM games ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        // Group items by game in memory.
        let mut by_game: std::collections::HashMap<String, Vec<GameItem>> =
            std::collections::HashMap::new();
        for row in sqlx::query_as::<_, ItemRow>(
            "SELECT id, game_id, name, price FROM game_items ORDER BY price",
        )
        .fetch_all(&self.pool)
        .await?
        {
            by_game
                .entry(row.game_id.clone())
                .or_default()
                .push(GameItem::from(row));
        }

        Ok(games
            .into_iter()
            .map(|row| {
                let items = by_game.remove(&row.id).unwrap_or_default();
                row.into_game(items)
            })
            .collect())
    }

    // =========================================================================
    // Transaction Operations
    // =========================================================================

    async fn insert_transaction(&self, transaction: &Transaction) -> Result<()> {
        sqlx::query(
            "INSERT INTO transactions \
             (id, phone, game_name, item_name, price, unique_code, final_price, status, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(transaction.id.as_str())
        .bind(&transaction.phone)
        .bind(&transaction.game_name)
        .bind(&transaction.item_name)
        .bind(transaction.price)
        .bind(transaction.unique_code)
        .bind(transaction.final_price)
        .bind(transaction.status.as_str())
        .bind(transaction.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_transaction(&self, id: &str) -> Result<Option<Transaction>> {
        let row = sqlx::query_as::<_, TransactionRow>(
            "SELECT id, phone, game_name, item_name, price, unique_code, final_price, status, created_at \
             FROM transactions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Transaction::try_from).transpose()
    }

    async fn list_transactions(&self, limit: Option<i64>) -> Result<Vec<Transaction>> {
        let rows = match limit {
            Some(limit) => {
                sqlx::query_as::<_, TransactionRow>(
                    "SELECT id, phone, game_name, item_name, price, unique_code, final_price, status, created_at \
                     FROM transactions ORDER BY created_at DESC LIMIT $1",
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, TransactionRow>(
                    "SELECT id, phone, game_name, item_name, price, unique_code, final_price, status, created_at \
                     FROM transactions ORDER BY created_at DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(Transaction::try_from).collect()
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<()> {
        let result = sqlx::query("UPDATE transactions SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Transaction",
                id: id.to_string(),
            });
        }

        Ok(())
    }

    async fn delete_transaction(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                entity: "Transaction",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}
