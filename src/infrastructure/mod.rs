pub mod catalog_repo;
pub mod models;
pub mod order_repo;
pub mod seed;

#[cfg(test)]
pub(crate) mod test_db;
