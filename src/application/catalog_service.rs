use crate::domain::catalog::{Special, Topping};
use crate::domain::errors::DomainError;
use crate::domain::ports::CatalogRepository;

pub struct CatalogService<R> {
    repo: R,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn specials(&self) -> Result<Vec<Special>, DomainError> {
        self.repo.list_specials()
    }

    pub fn toppings(&self) -> Result<Vec<Topping>, DomainError> {
        self.repo.list_toppings()
    }
}
