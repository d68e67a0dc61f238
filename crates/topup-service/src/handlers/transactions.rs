//! Order handlers: checkout, tracking, and the admin status workflow.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use topup_core::{InvoiceId, OrderStatus, Transaction};

use crate::config::DEFAULT_LIST_LIMIT;
use crate::error::ApiError;
use crate::state::AppState;

/// Order response, one row of the `transactions` table.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Invoice ID.
    pub id: String,
    /// Customer phone number.
    pub phone: String,
    /// Game display name.
    pub game_name: String,
    /// Bundle display name.
    pub item_name: String,
    /// Bundle price.
    pub price: i64,
    /// Reconciliation surcharge.
    pub unique_code: i64,
    /// Amount the customer transfers.
    pub final_price: i64,
    /// Workflow status label.
    pub status: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl From<&Transaction> for TransactionResponse {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.to_string(),
            phone: tx.phone.clone(),
            game_name: tx.game_name.clone(),
            item_name: tx.item_name.clone(),
            price: tx.price,
            unique_code: tx.unique_code,
            final_price: tx.final_price,
            status: tx.status.to_string(),
            created_at: tx.created_at.to_rfc3339(),
        }
    }
}

/// Order list query parameters.
#[derive(Debug, Deserialize)]
pub struct ListTransactionsQuery {
    /// Maximum number of orders to return; `-1` returns all (default: 10).
    pub limit: Option<i64>,
}

/// List orders, newest first.
pub async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTransactionsQuery>,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    let limit = match query.limit.unwrap_or(DEFAULT_LIST_LIMIT) {
        -1 => None,
        n => Some(n),
    };

    let transactions = state.store.list_transactions(limit).await?;

    Ok(Json(
        transactions.iter().map(TransactionResponse::from).collect(),
    ))
}

/// Checkout request.
///
/// Everything is optional at the serde level so a missing field maps to a
/// 400 rather than a deserialization rejection; the handler enforces which
/// fields are required.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Client-generated invoice ID.
    pub id: Option<String>,
    /// Customer phone number.
    pub phone: Option<String>,
    /// Game display name.
    pub game_name: Option<String>,
    /// Bundle display name.
    pub item_name: Option<String>,
    /// Bundle price.
    pub price: Option<i64>,
    /// Reconciliation surcharge; defaults to 0 when omitted.
    pub unique_code: Option<i64>,
    /// Transfer amount; defaults to `price` when omitted.
    pub final_price: Option<i64>,
}

/// Checkout response.
#[derive(Debug, Serialize)]
pub struct CreateTransactionResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The invoice ID, echoed back.
    pub id: String,
}

/// Create an order.
///
/// The client computes `unique_code` and `final_price`; the server stores
/// them verbatim. Status is always `Waiting` on creation.
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<CreateTransactionResponse>), ApiError> {
    let (Some(id), Some(phone), Some(game_name), Some(item_name), Some(price)) =
        (body.id, body.phone, body.game_name, body.item_name, body.price)
    else {
        return Err(ApiError::BadRequest("Missing required fields".into()));
    };

    let id: InvoiceId = id
        .parse()
        .map_err(|_| ApiError::BadRequest("Missing required fields".into()))?;

    let transaction = Transaction {
        id: id.clone(),
        phone,
        game_name,
        item_name,
        price,
        unique_code: body.unique_code.unwrap_or(0),
        final_price: body.final_price.unwrap_or(price),
        status: OrderStatus::Waiting,
        created_at: chrono::Utc::now(),
    };

    state.store.insert_transaction(&transaction).await?;

    tracing::info!(
        invoice = %transaction.id,
        final_price = transaction.final_price,
        "Transaction created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateTransactionResponse {
            message: "Transaction created".to_string(),
            id: id.to_string(),
        }),
    ))
}

/// Get an order by invoice ID.
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let transaction = state
        .store
        .get_transaction(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Transaction not found".into()))?;

    Ok(Json(TransactionResponse::from(&transaction)))
}

/// Status update request.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    /// The new status label.
    pub status: Option<String>,
}

/// Confirmation message body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

/// Update an order's status (admin action).
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Some(status) = body.status else {
        return Err(ApiError::BadRequest("Status is required".into()));
    };

    let status: OrderStatus = status
        .parse()
        .map_err(|e: topup_core::ParseStatusError| ApiError::BadRequest(e.to_string()))?;

    state.store.update_status(&id, status).await?;

    tracing::info!(invoice = %id, status = %status, "Transaction status updated");

    Ok(Json(MessageResponse {
        message: "Transaction status updated".to_string(),
    }))
}

/// Delete an order (admin action).
pub async fn delete_transaction(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete_transaction(&id).await?;

    tracing::info!(invoice = %id, "Transaction deleted");

    Ok(Json(MessageResponse {
        message: "Transaction deleted".to_string(),
    }))
}
