mod config;
mod constants;
mod db;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};

use crate::config::Config;
use crate::db::SqlExecutor;
use crate::repositories::{PgUserRepository, UserRepository};
use crate::services::diagnostics::run_startup_diagnostics;
use crate::services::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    // The pool connects lazily; the probe below is the first round trip.
    let pool = db::create_pool(
        &config.database_url,
        config.database_max_connections,
        config.database_acquire_timeout,
    )
    .map_err(|err| {
        error!("Invalid DATABASE_URL: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;
    let executor = SqlExecutor::new(pool);

    db::run_startup_probe(&executor).await;

    let repository: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(executor));
    let user_service = web::Data::new(UserService::new(repository));

    run_startup_diagnostics(&config, &user_service).await;

    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
