pub mod application;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::catalog_service::CatalogService;
use application::order_service::OrderService;
use domain::ports::{CatalogRepository, OrderRepository};
use domain::status::StatusTimings;
use errors::{AppError, StartupError};
use infrastructure::catalog_repo::DieselCatalogRepository;
use infrastructure::order_repo::DieselOrderRepository;

pub use config::Settings;
pub use db::{create_pool, DbPool};
pub use infrastructure::seed::seed_catalog;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::orders::list_orders,
        handlers::orders::place_order,
        handlers::orders::get_order,
        handlers::catalog::list_specials,
        handlers::catalog::list_toppings,
    ),
    components(schemas(
        handlers::orders::PlaceOrderRequest,
        handlers::orders::PizzaRequest,
        handlers::orders::PizzaToppingRequest,
        handlers::orders::CatalogRef,
        handlers::orders::OrderWithStatusResponse,
        handlers::orders::PizzaResponse,
        handlers::orders::PizzaToppingResponse,
        handlers::catalog::SpecialResponse,
        handlers::catalog::ToppingResponse,
    )),
    tags(
        (name = "orders", description = "Place and track pizza orders"),
        (name = "catalog", description = "Read-only specials and toppings"),
    )
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), StartupError> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StartupError::Migration(e.to_string()))?;
    if !applied.is_empty() {
        log::info!("Applied {} database migration(s)", applied.len());
    }
    Ok(())
}

/// Register the order and catalog routes for the given repository types.
///
/// Expects `web::Data<OrderService<O>>` and `web::Data<CatalogService<C>>` to be
/// registered as app data. Body and path decode failures are answered with the
/// same JSON error body as every other `AppError`.
pub fn configure<O: OrderRepository, C: CatalogRepository>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(web::PathConfig::default().error_handler(|_err, _req| AppError::NotFound.into()))
    .service(
        web::scope("/orders")
            .route("", web::get().to(handlers::orders::list_orders::<O>))
            .route("", web::post().to(handlers::orders::place_order::<O>))
            .route("/{order_id}", web::get().to(handlers::orders::get_order::<O>)),
    )
    .route("/specials", web::get().to(handlers::catalog::list_specials::<C>))
    .route("/toppings", web::get().to(handlers::catalog::list_toppings::<C>));
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    timings: StatusTimings,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let orders = web::Data::new(OrderService::new(
        DieselOrderRepository::new(pool.clone()),
        timings,
    ));
    let catalog = web::Data::new(CatalogService::new(DieselCatalogRepository::new(pool)));
    let openapi = ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .app_data(orders.clone())
            .app_data(catalog.clone())
            .wrap(Logger::default())
            .configure(configure::<DieselOrderRepository, DieselCatalogRepository>)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
