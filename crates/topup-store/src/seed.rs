//! Built-in catalog and startup seeding.
//!
//! Seeding is insert-if-missing per game: existing games are left untouched,
//! so re-running at every startup never duplicates rows.

use topup_core::{Game, GameItem, InputField};

use crate::error::Result;
use crate::Store;

fn game(
    id: &str,
    name: &str,
    publisher: &str,
    image: &str,
    inputs: Vec<InputField>,
    items: &[(&str, &str, i64)],
) -> Game {
    Game {
        id: id.to_string(),
        name: name.to_string(),
        publisher: Some(publisher.to_string()),
        image: Some(image.to_string()),
        inputs,
        items: items
            .iter()
            .map(|(item_id, item_name, price)| GameItem {
                id: (*item_id).to_string(),
                game_id: id.to_string(),
                name: (*item_name).to_string(),
                price: *price,
            })
            .collect(),
    }
}

/// The catalog shipped with the storefront.
#[must_use]
pub fn builtin_catalog() -> Vec<Game> {
    vec![
        game(
            "mobile-legends",
            "Mobile Legends",
            "Moonton",
            "https://ui-avatars.com/api/?name=ML&background=0D8ABC&color=fff&size=200",
            vec![
                InputField::text("userId", "User ID", "12345678"),
                InputField::text("zoneId", "Zone ID", "1234"),
            ],
            &[
                ("ml-3", "3 Diamonds", 1_500),
                ("ml-5", "5 Diamonds", 2_500),
                ("ml-12", "12 Diamonds", 5_000),
                ("ml-50", "50 Diamonds", 15_000),
                ("ml-100", "100 Diamonds", 30_000),
                ("ml-366", "366 Diamonds", 100_000),
            ],
        ),
        game(
            "free-fire",
            "Free Fire",
            "Garena",
            "https://ui-avatars.com/api/?name=FF&background=FFA500&color=fff&size=200",
            vec![InputField::text("userId", "Player ID", "123456789")],
            &[
                ("ff-5", "5 Diamonds", 1_000),
                ("ff-12", "12 Diamonds", 2_000),
                ("ff-50", "50 Diamonds", 8_000),
                ("ff-70", "70 Diamonds", 10_000),
                ("ff-140", "140 Diamonds", 20_000),
                ("ff-355", "355 Diamonds", 50_000),
            ],
        ),
        game(
            "pubg-mobile",
            "PUBG Mobile",
            "Tencent",
            "https://ui-avatars.com/api/?name=PUBG&background=000&color=fff&size=200",
            vec![InputField::text("userId", "ID Karakter", "5123456789")],
            &[
                ("pubg-60", "60 UC", 14_000),
                ("pubg-325", "325 UC", 70_000),
                ("pubg-660", "660 UC", 140_000),
            ],
        ),
        game(
            "valorant",
            "Valorant",
            "Riot Games",
            "https://ui-avatars.com/api/?name=VAL&background=FF4655&color=fff&size=200",
            vec![InputField::text(
                "userId",
                "Riot ID (Username#Tag)",
                "Player#1234",
            )],
            &[
                ("val-125", "125 Points", 15_000),
                ("val-420", "420 Points", 50_000),
                ("val-700", "700 Points", 80_000),
            ],
        ),
        game(
            "genshin-impact",
            "Genshin Impact",
            "HoYoverse",
            "https://ui-avatars.com/api/?name=GI&background=fff&color=000&size=200",
            vec![
                InputField::text("userId", "UID", "800123456"),
                InputField::select(
                    "server",
                    "Server",
                    "Asia",
                    vec![
                        "Asia".to_string(),
                        "America".to_string(),
                        "Europe".to_string(),
                        "TW/HK/MO".to_string(),
                    ],
                ),
            ],
            &[
                ("gi-60", "60 Genesis Crystals", 16_000),
                ("gi-300", "300 Genesis Crystals", 79_000),
                ("gi-980", "980 Genesis Crystals", 249_000),
            ],
        ),
    ]
}

/// Seed the built-in catalog, skipping games that already exist.
///
/// Returns the number of games inserted.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub async fn seed_catalog(store: &dyn Store) -> Result<usize> {
    let mut inserted = 0;
    for game in builtin_catalog() {
        if store.get_game(&game.id).await?.is_some() {
            tracing::debug!(game = %game.id, "Game already seeded, skipping");
            continue;
        }
        store.put_game(&game).await?;
        tracing::info!(game = %game.id, items = game.items.len(), "Seeded game");
        inserted += 1;
    }
    Ok(inserted)
}
