//! Catalog types: games and their purchasable currency bundles.
//!
//! Catalog rows are static reference data, seeded once and rarely mutated.
//! Each game declares the input fields the customer must fill at checkout
//! (user ID, zone ID, server selector) as a JSON-encoded descriptor list.

use serde::{Deserialize, Serialize};

/// A game offered on the storefront, with its purchasable bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Slug identifier (e.g. `mobile-legends`).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Publisher name, if known.
    pub publisher: Option<String>,

    /// Cover image URL, if any.
    pub image: Option<String>,

    /// Input fields the customer must provide at checkout.
    pub inputs: Vec<InputField>,

    /// Purchasable currency bundles for this game.
    pub items: Vec<GameItem>,
}

/// A purchasable in-game currency bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameItem {
    /// Bundle identifier (e.g. `ml-50`).
    pub id: String,

    /// Owning game slug.
    pub game_id: String,

    /// Display name (e.g. `50 Diamonds`).
    pub name: String,

    /// Price in the smallest currency unit.
    pub price: i64,
}

/// A checkout input field descriptor.
///
/// Rendered by the frontend as a text input, or a select when `kind` is
/// `"select"` and `options` lists the choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    /// Field name submitted by the frontend (e.g. `userId`, `zoneId`).
    pub name: String,

    /// Human-readable label.
    pub label: String,

    /// Placeholder text shown in the empty field.
    pub placeholder: String,

    /// Field type; absent means plain text.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Choices for select fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl InputField {
    /// A plain text input field.
    #[must_use]
    pub fn text(
        name: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            placeholder: placeholder.into(),
            kind: None,
            options: None,
        }
    }

    /// A select field with fixed options.
    #[must_use]
    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            placeholder: placeholder.into(),
            kind: Some("select".to_string()),
            options: Some(options),
        }
    }
}
