//! Landing page.

use actix_web::{get, web, Responder};

use crate::config::settings;
use crate::view::{Page, ViewRenderer};

/// GET /
#[get("/")]
pub async fn home(renderer: web::Data<dyn ViewRenderer>) -> impl Responder {
    Page::render("Home")
        .value("message", settings().greeting.as_str())
        .respond(renderer.get_ref())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
}
