use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use harbormaster_server::auth::handlers::{login, register};
use harbormaster_server::boats::handlers::{create_boat, list_my_boats};
use harbormaster_server::{health_check, root, AppError, AppState, Settings};
use std::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[actix_web::main]
async fn main() -> harbormaster_server::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();

    // Load configuration
    let config = Settings::new()?;
    info!("Configuration loaded successfully");

    info!(
        "Starting server at {}:{}",
        config.server.host, config.server.port
    );

    // Initialize application state
    let state = AppState::new(config).await?;
    let state = web::Data::new(state);

    // Make sure the tables exist before accepting traffic
    state.db.init_schema().await?;
    info!("Database schema ready");

    // Create and bind TCP listener
    let listener = TcpListener::bind(format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    ))?;
    let workers = state.config.server.workers as usize;

    // Start HTTP server
    HttpServer::new(move || {
        let cors = if state.config.cors.enabled {
            let cors_config = Cors::default();

            // Apply specific CORS rules based on configuration
            let cors_config = if state.config.cors.allow_any_origin {
                cors_config
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .expose_any_header()
                    .supports_credentials()
            } else {
                // More restrictive CORS for production use
                let mut restricted = cors_config
                    .allowed_methods(vec!["GET", "POST"])
                    .allowed_headers(vec!["Authorization", "Content-Type"])
                    .supports_credentials();
                for origin in &state.config.cors.allowed_origins {
                    restricted = restricted.allowed_origin(origin);
                }
                restricted
            };

            // Set max age
            cors_config.max_age(state.config.cors.max_age as usize)
        } else {
            // CORS disabled - use most restrictive settings
            Cors::default()
        };

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::Malformed(err.to_string()).into()
            }))
            .app_data(web::FormConfig::default().error_handler(|err, _req| {
                AppError::Malformed(err.to_string()).into()
            }))
            .route("/", web::get().to(root))
            .route("/health", web::get().to(health_check))
            .route("/auth/register", web::post().to(register))
            .route("/auth/login", web::post().to(login))
            .route("/boats/", web::post().to(create_boat))
            .route("/boats/my", web::get().to(list_my_boats))
    })
    .listen(listener)?
    .workers(workers)
    .run()
    .await?;

    Ok(())
}
