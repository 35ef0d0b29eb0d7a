//! Liveness probe.

use actix_web::{get, web, HttpResponse, Responder};

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    // Nothing external to check; the store lives in this process.
    HttpResponse::Ok().body("ok")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}
