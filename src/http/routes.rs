use crate::http;
use actix_web::web;

/// Mount every page module at the site root.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    http::home::init_routes(cfg);
    http::players::init_routes(cfg);
    http::create_player::init_routes(cfg);
    http::health::init_routes(cfg);
}
