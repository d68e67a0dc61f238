//! HTTP request handlers.

pub mod games;
pub mod health;
pub mod transactions;
