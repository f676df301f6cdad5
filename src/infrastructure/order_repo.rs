use std::collections::HashMap;

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;

use crate::db::DbPool;
use crate::domain::catalog::Special;
use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, OrderView, PizzaToppingView, PizzaView};
use crate::domain::ports::OrderRepository;
use crate::schema::{orders, pizza_toppings, pizzas, specials, toppings};

use super::catalog_repo::with_default_toppings;
use super::models::{
    NewOrderRow, NewPizzaRow, OrderRow, PizzaRow, PizzaToppingRow, SpecialRow, ToppingRow,
};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        match e {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
                DomainError::UnknownCatalogItem(
                    info.details().unwrap_or_else(|| info.message()).to_string(),
                )
            }
            other => DomainError::Internal(other.to_string()),
        }
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Read-side assembly ───────────────────────────────────────────────────────

/// Resolve pizzas, their specials and their toppings for `rows`, keeping the
/// order of `rows`.
fn assemble(conn: &mut PgConnection, rows: Vec<OrderRow>) -> Result<Vec<OrderView>, DomainError> {
    let pizza_rows = PizzaRow::belonging_to(&rows)
        .select(PizzaRow::as_select())
        .order(pizzas::id.asc())
        .load(conn)?;

    let pizza_ids: Vec<i32> = pizza_rows.iter().map(|p| p.id).collect();
    let selections: Vec<(PizzaToppingRow, ToppingRow)> = pizza_toppings::table
        .inner_join(toppings::table)
        .filter(pizza_toppings::pizza_id.eq_any(pizza_ids))
        .select((PizzaToppingRow::as_select(), ToppingRow::as_select()))
        .order((pizza_toppings::pizza_id.asc(), pizza_toppings::topping_id.asc()))
        .load(conn)?;

    let mut toppings_by_pizza: HashMap<i32, Vec<PizzaToppingView>> = HashMap::new();
    for (selection, topping) in selections {
        toppings_by_pizza
            .entry(selection.pizza_id)
            .or_default()
            .push(PizzaToppingView {
                pizza_id: selection.pizza_id,
                topping_id: selection.topping_id,
                topping: topping.into(),
            });
    }

    let mut special_ids: Vec<i32> = pizza_rows.iter().map(|p| p.special_id).collect();
    special_ids.sort_unstable();
    special_ids.dedup();
    let special_rows = specials::table
        .filter(specials::id.eq_any(special_ids))
        .select(SpecialRow::as_select())
        .load(conn)?;
    let specials_by_id: HashMap<i32, Special> = with_default_toppings(conn, special_rows)?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    let pizzas_by_order = pizza_rows.grouped_by(&rows);
    rows.into_iter()
        .zip(pizzas_by_order)
        .map(|(order, pizza_rows)| {
            let pizzas = pizza_rows
                .into_iter()
                .map(|p| {
                    let special = specials_by_id.get(&p.special_id).cloned().ok_or_else(|| {
                        DomainError::Internal(format!(
                            "pizza {} references missing special {}",
                            p.id, p.special_id
                        ))
                    })?;
                    Ok(PizzaView {
                        id: p.id,
                        order_id: p.order_id,
                        special_id: p.special_id,
                        special,
                        quantity: p.quantity,
                        toppings: toppings_by_pizza.remove(&p.id).unwrap_or_default(),
                    })
                })
                .collect::<Result<Vec<_>, DomainError>>()?;
            Ok(OrderView {
                id: order.id,
                created_time: order.created_time,
                pizzas,
            })
        })
        .collect()
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(&self, order: NewOrder) -> Result<i32, DomainError> {
        let mut pooled = self.pool.get()?;
        let conn: &mut PgConnection = &mut pooled;

        conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Insert the order
            let order_id: i32 = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    created_time: order.created_time,
                })
                .returning(orders::id)
                .get_result(conn)?;

            // 2. Insert each pizza, then its topping selections.
            //    Unknown special or topping ids fail here on the foreign keys
            //    and roll the whole order back.
            for pizza in &order.pizzas {
                let pizza_id: i32 = diesel::insert_into(pizzas::table)
                    .values(&NewPizzaRow {
                        order_id,
                        special_id: pizza.special_id,
                        quantity: pizza.quantity,
                    })
                    .returning(pizzas::id)
                    .get_result(conn)?;

                let selections: Vec<PizzaToppingRow> = pizza
                    .topping_ids
                    .iter()
                    .map(|&topping_id| PizzaToppingRow {
                        pizza_id,
                        topping_id,
                    })
                    .collect();
                if !selections.is_empty() {
                    diesel::insert_into(pizza_toppings::table)
                        .values(&selections)
                        .execute(conn)?;
                }
            }

            Ok(order_id)
        })
    }

    fn find_by_id(&self, id: i32) -> Result<Option<OrderView>, DomainError> {
        let mut pooled = self.pool.get()?;
        let conn: &mut PgConnection = &mut pooled;

        conn.transaction::<_, DomainError, _>(|conn| {
            let order = orders::table
                .filter(orders::id.eq(id))
                .select(OrderRow::as_select())
                .first(conn)
                .optional()?;

            let Some(order) = order else {
                return Ok(None);
            };

            Ok(assemble(conn, vec![order])?.pop())
        })
    }

    fn list(&self) -> Result<Vec<OrderView>, DomainError> {
        let mut pooled = self.pool.get()?;
        let conn: &mut PgConnection = &mut pooled;

        conn.transaction::<_, DomainError, _>(|conn| {
            let rows = orders::table
                .select(OrderRow::as_select())
                .order((orders::created_time.desc(), orders::id.desc()))
                .load(conn)?;

            assemble(conn, rows)
        })
    }
}
