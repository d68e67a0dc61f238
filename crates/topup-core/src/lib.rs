//! Core types and utilities for the DS Store top-up backend.
//!
//! This crate provides the foundational types used throughout the storefront:
//!
//! - **Identifiers**: `InvoiceId`
//! - **Catalog**: `Game`, `GameItem`, `InputField`
//! - **Orders**: `Transaction`, `OrderStatus`
//! - **Pricing**: unique-code surcharge helpers
//!
//! # Price Unit
//!
//! Prices are integer amounts in the smallest currency unit (Rupiah), stored
//! as `i64` to avoid floating point precision issues. The unique code is a
//! small random surcharge in [1, 999] appended to the item price so that the
//! last three digits of an incoming bank transfer identify the order.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod ids;
pub mod order;
pub mod pricing;

pub use catalog::{Game, GameItem, InputField};
pub use ids::{IdError, InvoiceId};
pub use order::{OrderStatus, ParseStatusError, Transaction};
pub use pricing::{final_price, random_unique_code, UNIQUE_CODE_MAX, UNIQUE_CODE_MIN};
