//! Order types: the transaction record and its status workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::InvoiceId;
use crate::pricing::final_price;

/// A top-up order submitted at checkout.
///
/// Created by the storefront on checkout and mutated only through the admin
/// status update. Rows are hard-deleted, never archived. `final_price` is
/// trusted from the client; no server-side invariant ties it to
/// `price + unique_code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Client-generated invoice identifier.
    pub id: InvoiceId,

    /// Customer phone number (contact for manual follow-up).
    pub phone: String,

    /// Display name of the game, denormalized at checkout.
    pub game_name: String,

    /// Display name of the purchased bundle, denormalized at checkout.
    pub item_name: String,

    /// Bundle price in the smallest currency unit.
    pub price: i64,

    /// Random reconciliation surcharge in [1, 999]; 0 when the client
    /// omitted it.
    pub unique_code: i64,

    /// Amount the customer is asked to transfer (`price + unique_code`).
    pub final_price: i64,

    /// Current workflow status.
    pub status: OrderStatus,

    /// When the order was created.
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new order in the `Waiting` state with the given surcharge.
    #[must_use]
    pub fn new(
        id: InvoiceId,
        phone: impl Into<String>,
        game_name: impl Into<String>,
        item_name: impl Into<String>,
        price: i64,
        unique_code: i64,
    ) -> Self {
        Self {
            id,
            phone: phone.into(),
            game_name: game_name.into(),
            item_name: item_name.into(),
            price,
            unique_code,
            final_price: final_price(price, unique_code),
            status: OrderStatus::Waiting,
            created_at: Utc::now(),
        }
    }
}

/// Order workflow status.
///
/// Waiting → Processing → {Success, Failed}. Transitions happen only through
/// explicit admin action; the server does not restrict which transition is
/// requested, so an admin can re-mark any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Awaiting payment.
    #[default]
    Waiting,

    /// Payment received, top-up in progress.
    Processing,

    /// Top-up delivered.
    Success,

    /// Cancelled or payment never arrived.
    Failed,
}

impl OrderStatus {
    /// The exact label stored in the database and shown in the admin panel.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Processing => "Processing",
            Self::Success => "Success",
            Self::Failed => "Failed",
        }
    }

    /// Whether the order has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Waiting" => Ok(Self::Waiting),
            "Processing" => Ok(Self::Processing),
            "Success" => Ok(Self::Success),
            "Failed" => Ok(Self::Failed),
            // Legacy rows predating the status column default.
            "" => Ok(Self::Waiting),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Error returned when a status label is not part of the workflow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct ParseStatusError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_transaction_defaults() {
        let tx = Transaction::new(
            InvoiceId::generate(),
            "08123456789",
            "Mobile Legends",
            "50 Diamonds",
            15_000,
            421,
        );
        assert_eq!(tx.status, OrderStatus::Waiting);
        assert_eq!(tx.final_price, 15_421);
    }

    #[test]
    fn status_labels_roundtrip() {
        for status in [
            OrderStatus::Waiting,
            OrderStatus::Processing,
            OrderStatus::Success,
            OrderStatus::Failed,
        ] {
            let parsed: OrderStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn empty_status_reads_as_waiting() {
        assert_eq!("".parse::<OrderStatus>().unwrap(), OrderStatus::Waiting);
    }

    #[test]
    fn unknown_status_rejected() {
        let err = "Refunded".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err, ParseStatusError("Refunded".to_string()));
    }

    #[test]
    fn terminal_states() {
        assert!(!OrderStatus::Waiting.is_terminal());
        assert!(!OrderStatus::Processing.is_terminal());
        assert!(OrderStatus::Success.is_terminal());
        assert!(OrderStatus::Failed.is_terminal());
    }

    #[test]
    fn transaction_serde_roundtrip() {
        let tx = Transaction::new(
            InvoiceId::from_timestamp_millis(1_700_000_123_456),
            "08123456789",
            "Free Fire",
            "12 Diamonds",
            2_000,
            7,
        );
        let json = serde_json::to_string(&tx).unwrap();
        let parsed: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, parsed);
    }
}
