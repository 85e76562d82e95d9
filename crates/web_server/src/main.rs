//! Main entry point for the camp signups backend server.
//! This crate wires configuration, the SQLite pool and the REST handlers together.

use actix_web::{App, HttpServer, middleware::Logger, web};
use camp_store::database::*;
use web_server::config::ServerConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    log::info!("🚀 Starting camp signups server...");

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Create database connection pool
    let pool = match create_connection_pool(&config.database_url, config.max_connections).await {
        Ok(pool) => {
            log::info!("🗃️ Database pool created for {}", config.database_url);

            if let Err(e) = test_connection(&pool).await {
                log::error!("❌ Database connection test failed: {}", e);
            }
            pool
        }
        Err(e) => {
            log::error!("❌ Failed to create database pool: {}", e);
            log::error!("💡 Check that DATABASE_URL points at a writable location");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_schema(&pool).await {
        log::error!("❌ Failed to create database schema: {}", e);
        std::process::exit(1);
    }

    log::info!(
        "🌐 Server will be available at: http://{}:{}",
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(Logger::default())
            .configure(web_handlers::configure)
    })
    .bind(config.bind_address())?
    .run()
    .await
}
