use std::sync::Mutex;

use crate::domain::catalog::{Special, Topping};
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderView, PizzaToppingView, PizzaView};
use crate::domain::ports::{CatalogRepository, OrderRepository};
use crate::infrastructure::seed::catalog;

/// In-memory stand-in for the Postgres repositories. Enforces the same
/// catalog references the foreign keys do, and writes all-or-nothing.
pub(crate) struct InMemoryStore {
    specials: Vec<Special>,
    toppings: Vec<Topping>,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    next_order_id: i32,
    next_pizza_id: i32,
    orders: Vec<OrderView>,
}

impl InMemoryStore {
    pub(crate) fn with_catalog() -> Self {
        let (toppings, specials) = catalog().expect("seed catalog parses");
        Self {
            specials,
            toppings,
            state: Mutex::new(State::default()),
        }
    }

    fn special(&self, id: i32) -> Result<&Special, DomainError> {
        self.specials
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| DomainError::UnknownCatalogItem(format!("special {id}")))
    }

    fn topping(&self, id: i32) -> Result<&Topping, DomainError> {
        self.toppings
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| DomainError::UnknownCatalogItem(format!("topping {id}")))
    }
}

impl OrderRepository for InMemoryStore {
    fn create(&self, order: NewOrder) -> Result<i32, DomainError> {
        let mut state = self.state.lock().unwrap();
        let order_id = state.next_order_id + 1;
        let mut next_pizza_id = state.next_pizza_id;

        let mut pizzas = Vec::with_capacity(order.pizzas.len());
        for input in order.pizzas {
            next_pizza_id += 1;
            let toppings = input
                .topping_ids
                .iter()
                .map(|&topping_id| {
                    Ok(PizzaToppingView {
                        pizza_id: next_pizza_id,
                        topping_id,
                        topping: self.topping(topping_id)?.clone(),
                    })
                })
                .collect::<Result<Vec<_>, DomainError>>()?;
            pizzas.push(PizzaView {
                id: next_pizza_id,
                order_id,
                special_id: input.special_id,
                special: self.special(input.special_id)?.clone(),
                quantity: input.quantity,
                toppings,
            });
        }

        state.next_order_id = order_id;
        state.next_pizza_id = next_pizza_id;
        state.orders.push(OrderView {
            id: order_id,
            created_time: order.created_time,
            pizzas,
        });
        Ok(order_id)
    }

    fn find_by_id(&self, id: i32) -> Result<Option<OrderView>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state.orders.iter().find(|o| o.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<OrderView>, DomainError> {
        let mut orders = self.state.lock().unwrap().orders.clone();
        orders.sort_by(|a, b| {
            b.created_time
                .cmp(&a.created_time)
                .then(b.id.cmp(&a.id))
        });
        Ok(orders)
    }
}

impl CatalogRepository for InMemoryStore {
    fn list_specials(&self) -> Result<Vec<Special>, DomainError> {
        let mut specials = self.specials.clone();
        specials.sort_by(|a, b| b.base_price.cmp(&a.base_price));
        Ok(specials)
    }

    fn list_toppings(&self) -> Result<Vec<Topping>, DomainError> {
        let mut toppings = self.toppings.clone();
        toppings.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(toppings)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::InMemoryStore;
    use crate::domain::order::{NewOrder, PizzaInput};
    use crate::domain::ports::OrderRepository;

    #[test]
    fn equal_created_times_list_newest_id_first() {
        let store = InMemoryStore::with_catalog();
        let created_time = Utc::now();
        let order = || NewOrder {
            created_time,
            pizzas: vec![PizzaInput {
                special_id: 1,
                quantity: 1,
                topping_ids: vec![],
            }],
        };

        let first = store.create(order()).unwrap();
        let second = store.create(order()).unwrap();

        let ids: Vec<i32> = store.list().unwrap().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![second, first]);
    }
}
