use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderWithStatus, PizzaInput};
use crate::domain::ports::OrderRepository;
use crate::domain::status::StatusTimings;

pub struct OrderService<R> {
    repo: R,
    timings: StatusTimings,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R, timings: StatusTimings) -> Self {
        Self { repo, timings }
    }

    /// Stamp the order with the server clock and persist it.
    ///
    /// The timestamp is truncated to microseconds, the precision of the
    /// `created_time` column, so the value read back equals the one assigned here.
    pub fn place_order(&self, pizzas: Vec<PizzaInput>) -> Result<i32, DomainError> {
        if pizzas.is_empty() {
            return Err(DomainError::InvalidInput(
                "an order must contain at least one pizza".to_string(),
            ));
        }

        let order = NewOrder {
            created_time: Utc::now().trunc_subsecs(6),
            pizzas,
        };
        let order_id = self.repo.create(order)?;
        log::info!("Placed order {}", order_id);
        Ok(order_id)
    }

    pub fn get_order(
        &self,
        id: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<OrderWithStatus>, DomainError> {
        Ok(self
            .repo
            .find_by_id(id)?
            .map(|order| OrderWithStatus::from_order(order, now, &self.timings)))
    }

    pub fn list_orders(&self, now: DateTime<Utc>) -> Result<Vec<OrderWithStatus>, DomainError> {
        Ok(self
            .repo
            .list()?
            .into_iter()
            .map(|order| OrderWithStatus::from_order(order, now, &self.timings))
            .collect())
    }
}
