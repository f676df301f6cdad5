use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::catalog::Topping;
use crate::schema::{orders, pizza_toppings, pizzas, special_toppings, specials, toppings};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub created_time: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub created_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = pizzas)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PizzaRow {
    pub id: i32,
    pub order_id: i32,
    pub special_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = pizzas)]
pub struct NewPizzaRow {
    pub order_id: i32,
    pub special_id: i32,
    pub quantity: i32,
}

/// Explicit pizza/topping join row, keyed by both ids.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = pizza_toppings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PizzaToppingRow {
    pub pizza_id: i32,
    pub topping_id: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = toppings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ToppingRow {
    pub id: i32,
    pub name: String,
    pub price: BigDecimal,
}

impl From<ToppingRow> for Topping {
    fn from(row: ToppingRow) -> Self {
        Topping {
            id: row.id,
            name: row.name,
            price: row.price,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Insertable)]
#[diesel(table_name = specials)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SpecialRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub base_price: BigDecimal,
    pub image_url: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Insertable)]
#[diesel(table_name = special_toppings)]
#[diesel(primary_key(special_id, topping_id))]
#[diesel(belongs_to(SpecialRow, foreign_key = special_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SpecialToppingRow {
    pub special_id: i32,
    pub topping_id: i32,
}
