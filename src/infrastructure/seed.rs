use std::str::FromStr;

use bigdecimal::BigDecimal;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::catalog::{Special, Topping};
use crate::domain::errors::DomainError;
use crate::schema::{special_toppings, specials, toppings};

use super::models::{SpecialRow, SpecialToppingRow, ToppingRow};

// (id, name, price)
const TOPPINGS: &[(i32, &str, &str)] = &[
    (1, "Extra cheese", "2.50"),
    (2, "American bacon", "2.99"),
    (3, "British bacon", "2.99"),
    (4, "Canadian bacon", "2.99"),
    (5, "Tea and crumpets", "5.00"),
    (6, "Fresh-baked scones", "4.50"),
    (7, "Bell peppers", "1.00"),
    (8, "Onions", "1.00"),
    (9, "Mushrooms", "1.00"),
    (10, "Pepperoni", "1.00"),
    (11, "Duck sausage", "3.20"),
    (12, "Venison meatballs", "2.50"),
    (13, "Served on a silver platter", "250.99"),
    (14, "Lobster on top", "64.50"),
    (15, "Sturgeon caviar", "101.75"),
    (16, "Artichoke hearts", "3.40"),
    (17, "Fresh tomatoes", "1.50"),
    (18, "Basil", "1.00"),
    (19, "Steak (medium-rare)", "8.50"),
    (20, "Blazing hot peppers", "4.20"),
    (21, "Buffalo chicken", "5.00"),
    (22, "Blue cheese", "2.50"),
];

struct SpecialSeed {
    id: i32,
    name: &'static str,
    description: &'static str,
    base_price: &'static str,
    image_url: &'static str,
    default_toppings: &'static [i32],
}

const SPECIALS: &[SpecialSeed] = &[
    SpecialSeed {
        id: 1,
        name: "Basic Cheese Pizza",
        description: "It's cheesy and delicious. Why wouldn't you want one?",
        base_price: "9.99",
        image_url: "img/pizzas/cheese.jpg",
        default_toppings: &[1],
    },
    SpecialSeed {
        id: 2,
        name: "The Baconatorizor",
        description: "It has EVERY kind of bacon",
        base_price: "11.99",
        image_url: "img/pizzas/bacon.jpg",
        default_toppings: &[2, 3, 4],
    },
    SpecialSeed {
        id: 3,
        name: "Classic pepperoni",
        description: "It's the pizza you grew up with, but Blazing hot!",
        base_price: "10.50",
        image_url: "img/pizzas/pepperoni.jpg",
        default_toppings: &[10],
    },
    SpecialSeed {
        id: 4,
        name: "Buffalo chicken",
        description: "Spicy chicken, hot sauce and bleu cheese, guaranteed to warm you up",
        base_price: "12.75",
        image_url: "img/pizzas/meaty.jpg",
        default_toppings: &[21, 22],
    },
    SpecialSeed {
        id: 5,
        name: "Mushroom Lovers",
        description: "It has mushrooms. Isn't that obvious?",
        base_price: "11.00",
        image_url: "img/pizzas/mushroom.jpg",
        default_toppings: &[9],
    },
    SpecialSeed {
        id: 6,
        name: "The Brit",
        description: "When in London...",
        base_price: "10.25",
        image_url: "img/pizzas/brit.jpg",
        default_toppings: &[3, 5, 6],
    },
    SpecialSeed {
        id: 7,
        name: "Veggie Delight",
        description: "It's like salad, but on a pizza",
        base_price: "11.50",
        image_url: "img/pizzas/salad.jpg",
        default_toppings: &[7, 8, 9, 17],
    },
    SpecialSeed {
        id: 8,
        name: "Margherita",
        description: "Traditional Italian pizza with tomatoes and basil",
        base_price: "9.99",
        image_url: "img/pizzas/margherita.jpg",
        default_toppings: &[17, 18],
    },
];

fn parse_price(raw: &str) -> Result<BigDecimal, DomainError> {
    BigDecimal::from_str(raw)
        .map_err(|e| DomainError::Internal(format!("Invalid seed price '{}': {}", raw, e)))
}

/// The fixed storefront catalog: toppings, then specials.
pub fn catalog() -> Result<(Vec<Topping>, Vec<Special>), DomainError> {
    let toppings = TOPPINGS
        .iter()
        .map(|&(id, name, price)| {
            Ok(Topping {
                id,
                name: name.to_string(),
                price: parse_price(price)?,
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    let specials = SPECIALS
        .iter()
        .map(|s| {
            Ok(Special {
                id: s.id,
                name: s.name.to_string(),
                description: s.description.to_string(),
                base_price: parse_price(s.base_price)?,
                image_url: s.image_url.to_string(),
                default_topping_ids: s.default_toppings.to_vec(),
            })
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok((toppings, specials))
}

fn insert_catalog(conn: &mut PgConnection) -> Result<(), DomainError> {
    let (topping_list, special_list) = catalog()?;

    let topping_rows: Vec<ToppingRow> = topping_list
        .into_iter()
        .map(|t| ToppingRow {
            id: t.id,
            name: t.name,
            price: t.price,
        })
        .collect();
    diesel::insert_into(toppings::table)
        .values(&topping_rows)
        .execute(conn)?;

    let default_rows: Vec<SpecialToppingRow> = special_list
        .iter()
        .flat_map(|s| {
            s.default_topping_ids.iter().map(|&topping_id| SpecialToppingRow {
                special_id: s.id,
                topping_id,
            })
        })
        .collect();
    let special_rows: Vec<SpecialRow> = special_list
        .into_iter()
        .map(|s| SpecialRow {
            id: s.id,
            name: s.name,
            description: s.description,
            base_price: s.base_price,
            image_url: s.image_url,
        })
        .collect();
    diesel::insert_into(specials::table)
        .values(&special_rows)
        .execute(conn)?;
    diesel::insert_into(special_toppings::table)
        .values(&default_rows)
        .execute(conn)?;

    Ok(())
}

/// Populate the catalog if no specials exist yet.
///
/// Returns `true` when the catalog was written, `false` when it was already present.
pub fn seed_catalog(pool: &DbPool) -> Result<bool, DomainError> {
    let mut pooled = pool.get()?;
    let conn: &mut PgConnection = &mut pooled;

    conn.transaction::<_, DomainError, _>(|conn| {
        let existing: i64 = specials::table.count().get_result(conn)?;
        if existing > 0 {
            log::debug!("Catalog already holds {} specials, skipping seed", existing);
            return Ok(false);
        }

        insert_catalog(conn)?;
        log::info!(
            "Seeded catalog with {} specials and {} toppings",
            SPECIALS.len(),
            TOPPINGS.len()
        );
        Ok(true)
    })
}
