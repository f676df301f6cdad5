use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::catalog_service::CatalogService;
use crate::domain::catalog::{Special, Topping};
use crate::domain::ports::CatalogRepository;
use crate::errors::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ToppingResponse {
    pub id: i32,
    pub name: String,
    /// Decimal price as a string, e.g. "2.50"
    pub price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SpecialResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub base_price: String,
    pub image_url: String,
    pub default_topping_ids: Vec<i32>,
}

impl From<Topping> for ToppingResponse {
    fn from(t: Topping) -> Self {
        ToppingResponse {
            id: t.id,
            name: t.name,
            price: t.price.with_scale(2).to_string(),
        }
    }
}

impl From<Special> for SpecialResponse {
    fn from(s: Special) -> Self {
        SpecialResponse {
            id: s.id,
            name: s.name,
            description: s.description,
            base_price: s.base_price.with_scale(2).to_string(),
            image_url: s.image_url,
            default_topping_ids: s.default_topping_ids,
        }
    }
}

/// GET /specials
#[utoipa::path(
    get,
    path = "/specials",
    responses(
        (status = 200, description = "Specials, most expensive first", body = [SpecialResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "catalog"
)]
pub async fn list_specials<R: CatalogRepository>(
    service: web::Data<CatalogService<R>>,
) -> Result<HttpResponse, AppError> {
    let specials = web::block(move || service.specials())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<SpecialResponse> = specials.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /toppings
#[utoipa::path(
    get,
    path = "/toppings",
    responses(
        (status = 200, description = "Toppings sorted by name", body = [ToppingResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "catalog"
)]
pub async fn list_toppings<R: CatalogRepository>(
    service: web::Data<CatalogService<R>>,
) -> Result<HttpResponse, AppError> {
    let toppings = web::block(move || service.toppings())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<ToppingResponse> = toppings.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}
