//! Initial data: the default accounts and the whisky catalog.
//!
//! Inserted by the seed migration and loaded by [`InMemoryStorage::seeded`].
//!
//! [`InMemoryStorage::seeded`]: crate::infrastructure::InMemoryStorage::seeded

use crate::domain::Product;

/// Email of the account the stub authentication falls back to.
pub const ADMIN_EMAIL: &str = "admin@market.local";

/// `(id, email, name)` of every seeded account.
pub const SEED_ACCOUNTS: [(i64, &str, &str); 2] = [
    (1, ADMIN_EMAIL, "Administrator"),
    (2, "customer@market.local", "Test Customer"),
];

fn product(
    id: i64,
    name: &str,
    distillery: &str,
    price: i32,
    alcohol: f32,
    available: bool,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        distillery: distillery.to_string(),
        description: None,
        price,
        volume_ml: 700,
        alcohol,
        available,
    }
}

/// The initial catalog. Products 8 and 11 are out of stock.
pub fn seed_products() -> Vec<Product> {
    vec![
        product(1, "Ardbeg Ten", "Ardbeg", 5200, 46.0, true),
        product(2, "Lagavulin 16", "Lagavulin", 7900, 43.0, true),
        product(3, "Talisker 10", "Talisker", 4600, 45.8, true),
        product(4, "Glenfiddich 12", "Glenfiddich", 3900, 40.0, true),
        product(5, "Macallan 12 Double Cask", "Macallan", 6800, 40.0, true),
        product(6, "Laphroaig 10", "Laphroaig", 4400, 40.0, true),
        product(7, "Highland Park 12", "Highland Park", 4200, 40.0, true),
        product(8, "Springbank 15", "Springbank", 11900, 46.0, false),
        product(9, "The Classic Laddie", "Bruichladdich", 5400, 50.0, true),
        product(10, "Oban 14", "Oban", 7200, 43.0, true),
        product(11, "Port Charlotte 10", "Bruichladdich", 6100, 50.0, false),
    ]
}
