use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use study_match::config::{LogFormat, LoggingSettings, Settings};
use study_match::{configure_routes, AppState};
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    // Initialize logging; fall back to defaults so a bad config is still reported
    let logging = match &settings {
        Ok(s) => s.logging.clone(),
        Err(_) => LoggingSettings::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.log_format() {
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Json => subscriber.json().init(),
    }

    info!("Starting Study Match service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    let app_state = AppState::from_settings(&settings);

    info!(
        "Matcher initialized with bonuses: {:?}, processing delay: {:?}, seeded: {}",
        app_state.matcher.bonuses(),
        app_state.processing_delay,
        app_state.seed.is_some()
    );

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting HTTP server on {}:{}", host, port);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(configure_routes)
    });

    let server = match settings.server.workers {
        Some(workers) => server.workers(workers),
        None => server,
    };

    server.bind((host, port))?.run().await
}
