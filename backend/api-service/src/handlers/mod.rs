/// HTTP handlers for the RankPot API
pub mod meta;

pub use meta::*;

use actix_web::web;

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(meta::root))
        .route("/health", web::get().to(meta::health));
}
