//! In-memory storage implementation.
//!
//! Implements [`Store`] over plain vectors behind a mutex. Used by unit and
//! integration tests so the HTTP layer can be exercised without a database.

use std::sync::Mutex;

use async_trait::async_trait;

use topup_core::{Game, OrderStatus, Transaction};

use crate::error::{Result, StoreError};
use crate::Store;

#[derive(Default)]
struct Inner {
    games: Vec<Game>,
    // (insertion sequence, row); the sequence breaks ordering ties between
    // rows created within the same millisecond.
    transactions: Vec<(u64, Transaction)>,
    next_seq: u64,
}

/// In-memory storage backend.
#[derive(Default)]
pub struct MemStore {
    inner: Mutex<Inner>,
}

impl MemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl Store for MemStore {
    // =========================================================================
    // Catalog Operations
    // =========================================================================

    async fn put_game(&self, game: &Game) -> Result<()> {
        let mut inner = self.lock();
        if inner.games.iter().any(|g| g.id == game.id) {
            return Err(StoreError::Database(format!(
                "duplicate key value: games.id = {}",
                game.id
            )));
        }
        inner.games.push(game.clone());
        Ok(())
    }

    async fn get_game(&self, id: &str) -> Result<Option<Game>> {
        Ok(self.lock().games.iter().find(|g| g.id == id).cloned())
    }

    async fn list_games(&self) -> Result<Vec<Game>> {
        let mut games = self.lock().games.clone();
        games.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(games)
    }

    // =========================================================================
    // Transaction Operations
    // =========================================================================

    async fn insert_transaction(&self, transaction: &Transaction) -> Result<()> {
        let mut inner = self.lock();
        if inner.transactions.iter().any(|(_, t)| t.id == transaction.id) {
            return Err(StoreError::Database(format!(
                "duplicate key value: transactions.id = {}",
                transaction.id
            )));
        }
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.transactions.push((seq, transaction.clone()));
        Ok(())
    }

    async fn get_transaction(&self, id: &str) -> Result<Option<Transaction>> {
        Ok(self
            .lock()
            .transactions
            .iter()
            .find(|(_, t)| t.id.as_str() == id)
            .map(|(_, t)| t.clone()))
    }

    async fn list_transactions(&self, limit: Option<i64>) -> Result<Vec<Transaction>> {
        // Postgres rejects negative limits; keep the backends in agreement.
        if limit.is_some_and(|limit| limit < 0) {
            return Err(StoreError::Database(
                "LIMIT must not be negative".to_string(),
            ));
        }

        let mut rows = self.lock().transactions.clone();
        rows.sort_by(|(seq_a, a), (seq_b, b)| {
            (b.created_at, seq_b).cmp(&(a.created_at, seq_a))
        });

        let mut transactions: Vec<Transaction> = rows.into_iter().map(|(_, t)| t).collect();
        if let Some(limit) = limit {
            transactions.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(transactions)
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<()> {
        let mut inner = self.lock();
        match inner
            .transactions
            .iter_mut()
            .find(|(_, t)| t.id.as_str() == id)
        {
            Some((_, transaction)) => {
                transaction.status = status;
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "Transaction",
                id: id.to_string(),
            }),
        }
    }

    async fn delete_transaction(&self, id: &str) -> Result<()> {
        let mut inner = self.lock();
        let before = inner.transactions.len();
        inner.transactions.retain(|(_, t)| t.id.as_str() != id);
        if inner.transactions.len() == before {
            return Err(StoreError::NotFound {
                entity: "Transaction",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
