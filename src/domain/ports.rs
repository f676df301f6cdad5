use super::catalog::{Special, Topping};
use super::errors::DomainError;
use super::order::{NewOrder, OrderView};

pub trait OrderRepository: Send + Sync + 'static {
    /// Persist the order, its pizzas and their topping selections atomically.
    fn create(&self, order: NewOrder) -> Result<i32, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<OrderView>, DomainError>;
    /// All orders, most recent first.
    fn list(&self) -> Result<Vec<OrderView>, DomainError>;
}

pub trait CatalogRepository: Send + Sync + 'static {
    fn list_specials(&self) -> Result<Vec<Special>, DomainError>;
    fn list_toppings(&self) -> Result<Vec<Topping>, DomainError>;
}
