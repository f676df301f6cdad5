use dotenvy::dotenv;
use pizza_store::errors::StartupError;
use pizza_store::{build_server, create_pool, run_migrations, seed_catalog, Settings};

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env()?;

    let pool = create_pool(&settings.database_url, settings.pool_max_size)?;
    run_migrations(&pool)?;
    seed_catalog(&pool)?;

    log::info!(
        "Starting server at http://{}:{}",
        settings.host,
        settings.port
    );

    build_server(pool, settings.status_timings, &settings.host, settings.port)?.await?;
    Ok(())
}
