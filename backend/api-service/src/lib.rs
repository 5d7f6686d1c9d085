pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;

pub use config::Config;
pub use error::{AppError, Result};

use actix_web::web;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use openapi::ApiDoc;

/// Register every route, extractor config and the 404 fallback
///
/// `Config` itself is not registered here; callers add it as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let docs_root = format!("{}/", ApiDoc::docs_path());

    cfg.app_data(json_config())
        .app_data(query_config())
        .service(web::redirect(ApiDoc::docs_path(), docs_root))
        .service(
            SwaggerUi::new(format!("{}/{{_:.*}}", ApiDoc::docs_path()))
                .url(ApiDoc::openapi_json_path(), ApiDoc::openapi()),
        )
        .service(Redoc::with_url(ApiDoc::redoc_path(), ApiDoc::openapi()));

    handlers::register_routes(cfg);

    cfg.default_service(web::route().to(handlers::not_found));
}

/// Malformed JSON bodies become `invalid_request` errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Malformed query strings become `invalid_request` errors
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
