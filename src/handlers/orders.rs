use std::collections::HashSet;

use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::errors::DomainError;
use crate::domain::order::{OrderWithStatus, PizzaInput, PizzaToppingView, PizzaView};
use crate::domain::ports::OrderRepository;
use crate::errors::AppError;
use crate::handlers::catalog::{SpecialResponse, ToppingResponse};

// ── Request DTOs ─────────────────────────────────────────────────────────────

/// An embedded catalog object sent by the client. Only its `id` is ever used.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CatalogRef {
    pub id: i32,
}

/// One pizza/topping association, in the same shape the API returns it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PizzaToppingRequest {
    #[serde(default)]
    pub topping_id: Option<i32>,
    #[serde(default)]
    pub topping: Option<CatalogRef>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PizzaRequest {
    #[serde(default)]
    pub special_id: Option<i32>,
    #[serde(default)]
    pub special: Option<CatalogRef>,
    /// Defaults to 1.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default)]
    pub toppings: Vec<PizzaToppingRequest>,
}

fn default_quantity() -> i32 {
    1
}

/// Order submission. Any `order_id` or `created_time` sent by the client is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    pub pizzas: Vec<PizzaRequest>,
}

// ── Sanitization ─────────────────────────────────────────────────────────────

/// Collapse an id field and an optional embedded object into a single id.
fn resolve_ref(kind: &str, id: Option<i32>, inline: Option<CatalogRef>) -> Result<i32, DomainError> {
    match (id, inline.map(|r| r.id)) {
        (Some(id), Some(inline)) if id != inline => Err(DomainError::InvalidInput(format!(
            "{kind}_id {id} does not match embedded {kind} {inline}"
        ))),
        (_, Some(id)) | (Some(id), None) => Ok(id),
        (None, None) => Err(DomainError::InvalidInput(format!(
            "pizza is missing a {kind} reference"
        ))),
    }
}

impl PizzaRequest {
    fn sanitize(self) -> Result<PizzaInput, DomainError> {
        if self.quantity < 1 {
            return Err(DomainError::InvalidInput(format!(
                "quantity must be at least 1, got {}",
                self.quantity
            )));
        }
        let special_id = resolve_ref("special", self.special_id, self.special)?;

        let mut seen = HashSet::new();
        let mut topping_ids = Vec::with_capacity(self.toppings.len());
        for t in self.toppings {
            let topping_id = resolve_ref("topping", t.topping_id, t.topping)?;
            if !seen.insert(topping_id) {
                return Err(DomainError::InvalidInput(format!(
                    "topping {topping_id} selected more than once"
                )));
            }
            topping_ids.push(topping_id);
        }

        Ok(PizzaInput {
            special_id,
            quantity: self.quantity,
            topping_ids,
        })
    }
}

impl PlaceOrderRequest {
    /// Reduce the submitted order to catalog references by id. Embedded
    /// special and topping bodies are dropped so clients cannot inject
    /// catalog data through an order.
    pub fn sanitize(self) -> Result<Vec<PizzaInput>, DomainError> {
        self.pizzas.into_iter().map(PizzaRequest::sanitize).collect()
    }
}

// ── Response DTOs ────────────────────────────────────────────────────────────

fn money(value: &BigDecimal) -> String {
    value.with_scale(2).to_string()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaToppingResponse {
    pub pizza_id: i32,
    pub topping_id: i32,
    pub topping: ToppingResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaResponse {
    pub id: i32,
    pub order_id: i32,
    pub special_id: i32,
    pub special: SpecialResponse,
    pub quantity: i32,
    pub toppings: Vec<PizzaToppingResponse>,
    /// Decimal string, e.g. "27.96"
    pub total_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithStatusResponse {
    pub order_id: i32,
    /// RFC 3339 timestamp assigned by the server.
    pub created_time: String,
    pub pizzas: Vec<PizzaResponse>,
    pub total_price: String,
    /// One of `preparing`, `out_for_delivery`, `delivered`.
    pub status: String,
    pub status_text: String,
    pub is_delivered: bool,
}

impl From<PizzaToppingView> for PizzaToppingResponse {
    fn from(t: PizzaToppingView) -> Self {
        PizzaToppingResponse {
            pizza_id: t.pizza_id,
            topping_id: t.topping_id,
            topping: t.topping.into(),
        }
    }
}

impl From<PizzaView> for PizzaResponse {
    fn from(p: PizzaView) -> Self {
        let total_price = money(&p.total_price());
        PizzaResponse {
            id: p.id,
            order_id: p.order_id,
            special_id: p.special_id,
            special: p.special.into(),
            quantity: p.quantity,
            toppings: p.toppings.into_iter().map(Into::into).collect(),
            total_price,
        }
    }
}

impl From<OrderWithStatus> for OrderWithStatusResponse {
    fn from(o: OrderWithStatus) -> Self {
        let total_price = money(&o.order.total_price());
        OrderWithStatusResponse {
            order_id: o.order.id,
            created_time: o
                .order
                .created_time
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            pizzas: o.order.pizzas.into_iter().map(Into::into).collect(),
            total_price,
            status: o.status.as_str().to_string(),
            status_text: o.status.label().to_string(),
            is_delivered: o.status.is_delivered(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
///
/// Returns every order with its pizzas, specials and toppings, most recent first.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders, newest first", body = [OrderWithStatusResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders<R: OrderRepository>(
    service: web::Data<OrderService<R>>,
) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.list_orders(Utc::now()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderWithStatusResponse> = orders.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /orders
///
/// Places an order. The creation time is assigned by the server and every
/// special and topping is stored by id only. The order and all of its pizzas
/// are written in one transaction.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed; body is the new order id", body = i32),
        (status = 400, description = "Malformed order"),
        (status = 404, description = "Unknown special or topping"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn place_order<R: OrderRepository>(
    service: web::Data<OrderService<R>>,
    body: web::Json<PlaceOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let pizzas = body.into_inner().sanitize()?;

    let order_id = web::block(move || service.place_order(pizzas))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(order_id))
}

/// GET /orders/{order_id}
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(
        ("order_id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderWithStatusResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order<R: OrderRepository>(
    service: web::Data<OrderService<R>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let result = web::block(move || service.get_order(order_id, Utc::now()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match result {
        Some(order) => Ok(HttpResponse::Ok().json(OrderWithStatusResponse::from(order))),
        None => Err(AppError::NotFound),
    }
}
