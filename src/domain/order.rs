use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::catalog::{Special, Topping};
use super::status::{OrderStatus, StatusTimings};

/// A pizza as it is about to be persisted: catalog data is referenced by id only.
#[derive(Debug, Clone, PartialEq)]
pub struct PizzaInput {
    pub special_id: i32,
    pub quantity: i32,
    pub topping_ids: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub created_time: DateTime<Utc>,
    pub pizzas: Vec<PizzaInput>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PizzaToppingView {
    pub pizza_id: i32,
    pub topping_id: i32,
    pub topping: Topping,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PizzaView {
    pub id: i32,
    pub order_id: i32,
    pub special_id: i32,
    pub special: Special,
    pub quantity: i32,
    pub toppings: Vec<PizzaToppingView>,
}

impl PizzaView {
    /// Price of a single pizza: the special's base price plus every selected topping.
    pub fn unit_price(&self) -> BigDecimal {
        self.toppings
            .iter()
            .fold(self.special.base_price.clone(), |acc, t| acc + &t.topping.price)
    }

    pub fn total_price(&self) -> BigDecimal {
        self.unit_price() * BigDecimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderView {
    pub id: i32,
    pub created_time: DateTime<Utc>,
    pub pizzas: Vec<PizzaView>,
}

impl OrderView {
    pub fn total_price(&self) -> BigDecimal {
        self.pizzas
            .iter()
            .fold(BigDecimal::from(0), |acc, p| acc + p.total_price())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderWithStatus {
    pub order: OrderView,
    pub status: OrderStatus,
}

impl OrderWithStatus {
    pub fn from_order(order: OrderView, now: DateTime<Utc>, timings: &StatusTimings) -> Self {
        let status = OrderStatus::derive(order.created_time, now, timings);
        Self { order, status }
    }
}
