use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use api_service::config::{CorsConfig, LogFormat, LoggingConfig};
use api_service::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn build_cors(cors: &CorsConfig) -> Cors {
    let mut builder = Cors::default();
    for origin in &cors.allowed_origins {
        if origin == "*" {
            builder = builder.allow_any_origin();
        } else {
            builder = builder.allowed_origin(origin);
        }
    }
    builder
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::info!(
        app = %config.app.name,
        env = %config.app.env,
        version = env!("CARGO_PKG_VERSION"),
        "Starting RankPot API service"
    );
    tracing::debug!(?config, "loaded configuration");

    let bind_address = config.bind_address();
    let config_data = web::Data::new(config);

    tracing::info!("Starting HTTP server on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .app_data(config_data.clone())
            .wrap(build_cors(&config_data.cors))
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(api_service::configure)
    })
    .bind(bind_address)?
    .run()
    .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
