use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::catalog::{Special, Topping};
use crate::domain::errors::DomainError;
use crate::domain::ports::CatalogRepository;
use crate::schema::{special_toppings, specials, toppings};

use super::models::{SpecialRow, SpecialToppingRow, ToppingRow};

/// Attach each special's default topping ids.
pub(crate) fn with_default_toppings(
    conn: &mut PgConnection,
    rows: Vec<SpecialRow>,
) -> Result<Vec<Special>, DomainError> {
    let defaults = SpecialToppingRow::belonging_to(&rows)
        .select(SpecialToppingRow::as_select())
        .order(special_toppings::topping_id.asc())
        .load(conn)?;

    Ok(defaults
        .grouped_by(&rows)
        .into_iter()
        .zip(rows)
        .map(|(defaults, row)| Special {
            id: row.id,
            name: row.name,
            description: row.description,
            base_price: row.base_price,
            image_url: row.image_url,
            default_topping_ids: defaults.into_iter().map(|d| d.topping_id).collect(),
        })
        .collect())
}

pub struct DieselCatalogRepository {
    pool: DbPool,
}

impl DieselCatalogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CatalogRepository for DieselCatalogRepository {
    fn list_specials(&self) -> Result<Vec<Special>, DomainError> {
        let mut pooled = self.pool.get()?;
        let conn: &mut PgConnection = &mut pooled;

        conn.transaction::<_, DomainError, _>(|conn| {
            let rows = specials::table
                .select(SpecialRow::as_select())
                .order((specials::base_price.desc(), specials::id.asc()))
                .load(conn)?;
            with_default_toppings(conn, rows)
        })
    }

    fn list_toppings(&self) -> Result<Vec<Topping>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = toppings::table
            .select(ToppingRow::as_select())
            .order(toppings::name.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Topping::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::DieselCatalogRepository;
    use crate::domain::ports::CatalogRepository;
    use crate::infrastructure::test_db::setup_db;

    #[tokio::test]
    async fn specials_come_most_expensive_first_with_defaults() {
        let (_container, pool) = setup_db().await;
        let repo = DieselCatalogRepository::new(pool);

        let specials = repo.list_specials().expect("list specials failed");

        assert_eq!(specials.len(), 8);
        assert!(specials
            .windows(2)
            .all(|w| w[0].base_price >= w[1].base_price));
        let bacon = specials.iter().find(|s| s.id == 2).expect("special 2");
        assert_eq!(bacon.default_topping_ids, vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn toppings_are_sorted_by_name() {
        let (_container, pool) = setup_db().await;
        let repo = DieselCatalogRepository::new(pool);

        let toppings = repo.list_toppings().expect("list toppings failed");

        assert_eq!(toppings.len(), 22);
        assert_eq!(toppings[0].name, "American bacon");
        assert_eq!(toppings[21].name, "Venison meatballs");
    }
}
